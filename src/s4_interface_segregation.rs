//! Principle 4: Interface Segregation
//! Example: Office Machines and Posting Rights
//!
//! Run with: cargo run --bin s4_interface_segregation
//!
//! Small capability traits mean a type only implements what it can do;
//! nobody is forced to stub out methods it does not support.

// ============================================================================
// Example: Office Machines
// ============================================================================

struct Document {
    name: String,
}

trait Printer {
    fn print(&self, document: &Document) -> String;
}

trait Scanner {
    fn scan(&self, document: &Document) -> String;
}

trait Fax {
    fn fax(&self, document: &Document) -> String;
}

// Only prints; a fat "Machine" trait would force scan/fax stubs here.
struct SimplePrinter;
impl Printer for SimplePrinter {
    fn print(&self, document: &Document) -> String {
        format!("Printing {}", document.name)
    }
}

struct MultiFunctionPrinter;
impl Printer for MultiFunctionPrinter {
    fn print(&self, document: &Document) -> String {
        format!("Printing {}", document.name)
    }
}

impl Scanner for MultiFunctionPrinter {
    fn scan(&self, document: &Document) -> String {
        format!("Scanning {}", document.name)
    }
}

impl Fax for MultiFunctionPrinter {
    fn fax(&self, document: &Document) -> String {
        format!("Faxing {}", document.name)
    }
}

fn machines_example() {
    let report = Document {
        name: "quarterly report".to_string(),
    };

    let simple = SimplePrinter;
    println!("{}", simple.print(&report));

    let multi = MultiFunctionPrinter;
    println!("{}", multi.print(&report));
    println!("{}", multi.scan(&report));
    println!("{}", multi.fax(&report));
}

// ============================================================================
// Example: Posting Rights
// ============================================================================

struct Post {
    title: String,
}

struct Comment {
    body: String,
}

trait PostCreator {
    fn create_post(&self, post: &Post) -> String;
}

trait CommentCreator {
    fn create_comment(&self, comment: &Comment) -> String;
}

trait PostSharer {
    fn share_post(&self, post: &Post) -> String;
}

struct Admin;
impl PostCreator for Admin {
    fn create_post(&self, post: &Post) -> String {
        format!("Admin created post '{}'", post.title)
    }
}

impl CommentCreator for Admin {
    fn create_comment(&self, comment: &Comment) -> String {
        format!("Admin commented: {}", comment.body)
    }
}

impl PostSharer for Admin {
    fn share_post(&self, post: &Post) -> String {
        format!("Admin shared post '{}'", post.title)
    }
}

// Regular users never see create_post; the capability simply isn't there.
struct RegularUser;
impl CommentCreator for RegularUser {
    fn create_comment(&self, comment: &Comment) -> String {
        format!("Regular user commented: {}", comment.body)
    }
}

impl PostSharer for RegularUser {
    fn share_post(&self, post: &Post) -> String {
        format!("Regular user shared post '{}'", post.title)
    }
}

fn announce<U: PostCreator + PostSharer>(user: &U, post: &Post) {
    println!("{}", user.create_post(post));
    println!("{}", user.share_post(post));
}

fn posting_example() {
    let post = Post {
        title: "Interface segregation in Rust".to_string(),
    };
    let comment = Comment {
        body: "Small traits compose well".to_string(),
    };

    announce(&Admin, &post);
    // announce(&RegularUser, &post); // does not compile: RegularUser is not a PostCreator

    println!("{}", RegularUser.create_comment(&comment));
    println!("{}", RegularUser.share_post(&post));
}

fn main() {
    println!("Principle 4: Interface Segregation");
    println!("==================================\n");

    println!("=== Office Machines ===");
    machines_example();
    println!();

    println!("=== Posting Rights ===");
    posting_example();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_function_printer_has_all_capabilities() {
        let doc = Document {
            name: "doc".to_string(),
        };
        let machine = MultiFunctionPrinter;
        assert_eq!(machine.print(&doc), "Printing doc");
        assert_eq!(machine.scan(&doc), "Scanning doc");
        assert_eq!(machine.fax(&doc), "Faxing doc");
    }

    #[test]
    fn test_simple_printer_prints() {
        let doc = Document {
            name: "doc".to_string(),
        };
        assert_eq!(SimplePrinter.print(&doc), "Printing doc");
    }

    #[test]
    fn test_regular_user_capabilities() {
        let post = Post {
            title: "t".to_string(),
        };
        let comment = Comment {
            body: "b".to_string(),
        };
        assert!(RegularUser.create_comment(&comment).contains("Regular user"));
        assert!(RegularUser.share_post(&post).contains("shared"));
    }

    #[test]
    fn test_admin_has_every_capability() {
        let post = Post {
            title: "t".to_string(),
        };
        assert!(Admin.create_post(&post).contains("created"));
        assert!(Admin.share_post(&post).contains("shared"));
    }
}
