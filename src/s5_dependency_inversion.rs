//! Principle 5: Dependency Inversion
//! Example: Swappable Storage Backends
//!
//! Run with: cargo run --bin s5_dependency_inversion
//!
//! The high-level module depends on the Database trait, never on a concrete
//! backend; backends can be swapped (or mocked) without touching it.

trait Database {
    fn save(&self, data: &str);
}

struct MySqlDatabase;
impl Database for MySqlDatabase {
    fn save(&self, data: &str) {
        println!("Saving '{data}' to MySQL");
    }
}

struct MongoDbDatabase;
impl Database for MongoDbDatabase {
    fn save(&self, data: &str) {
        println!("Saving '{data}' to MongoDB");
    }
}

struct HighLevelModule {
    database: Box<dyn Database>,
}

impl HighLevelModule {
    fn new(database: Box<dyn Database>) -> Self {
        Self { database }
    }

    fn execute(&self, data: &str) {
        self.database.save(data);
    }
}

fn main() {
    println!("Principle 5: Dependency Inversion");
    println!("=================================\n");

    let users = HighLevelModule::new(Box::new(MySqlDatabase));
    users.execute("John");

    let posts = HighLevelModule::new(Box::new(MongoDbDatabase));
    posts.execute("New post");
}
