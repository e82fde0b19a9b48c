mod health_check;
mod list;
mod mongo_store;
