//! Built-in recommendation list

use bookshelf_carousel::BookEntry;

/// Recommendations shown when the catalog yields nothing usable.
///
/// Also seeds the shelf when the widget mounts.
pub fn fallback_books() -> Vec<BookEntry> {
    vec![
        BookEntry::new(
            "活着",
            "余华",
            "https://img3.doubanio.com/view/subject/s/public/s1080178.jpg",
        ),
        BookEntry::new(
            "百年孤独",
            "加西亚·马尔克斯",
            "https://img9.doubanio.com/view/subject/s/public/s6384944.jpg",
        ),
        BookEntry::new(
            "小王子",
            "圣埃克苏佩里",
            "https://img9.doubanio.com/view/subject/s/public/s1237549.jpg",
        ),
    ]
}
