pub mod mongo;

pub use mongo::MongoGroupRepository;
