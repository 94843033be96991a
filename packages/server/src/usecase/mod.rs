//! UseCase layer: the router's connect, disconnect and message flows.

pub mod connect_user;
pub mod disconnect_user;
pub mod fan_out;
pub mod get_online_users;
pub mod route_message;

pub use connect_user::{Connected, ConnectUserUseCase};
pub use disconnect_user::DisconnectUserUseCase;
pub use fan_out::FanOutReport;
pub use get_online_users::GetOnlineUsersUseCase;
pub use route_message::RouteMessageUseCase;
