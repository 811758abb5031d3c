//! Principle 1: Single Responsibility
//! Example: Blog Post Storage vs Rendering
//!
//! Run with: cargo run --bin s1_single_responsibility

// Owns the post content and nothing else.
#[derive(Debug)]
struct BlogPost {
    title: String,
    content: String,
}

impl BlogPost {
    fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    fn update_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

// Rendering lives in its own type; changing the markup never touches BlogPost.
struct BlogPostDisplay<'a> {
    post: &'a BlogPost,
}

impl<'a> BlogPostDisplay<'a> {
    fn new(post: &'a BlogPost) -> Self {
        Self { post }
    }

    fn display_html(&self) -> String {
        format!("<h1>{}</h1><p>{}</p>", self.post.title, self.post.content)
    }
}

fn main() {
    println!("Principle 1: Single Responsibility");
    println!("==================================\n");

    let mut post = BlogPost::new("Hello Rust", "First draft");
    post.update_content("Ownership makes responsibilities explicit.");

    let display = BlogPostDisplay::new(&post);
    println!("{}", display.display_html());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_content_replaces_body() {
        let mut post = BlogPost::new("Title", "old");
        post.update_content("new");
        assert_eq!(post.content, "new");
        assert_eq!(post.title, "Title");
    }

    #[test]
    fn test_display_wraps_title_and_content() {
        let post = BlogPost::new("Title", "Body");
        let display = BlogPostDisplay::new(&post);
        assert_eq!(display.display_html(), "<h1>Title</h1><p>Body</p>");
    }
}
