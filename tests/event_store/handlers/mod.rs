pub mod house_was_listed;
