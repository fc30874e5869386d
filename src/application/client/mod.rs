pub mod delete_client;
pub mod list_clients;

pub use delete_client::DeleteClientUseCase;
pub use list_clients::ListClientsUseCase;
