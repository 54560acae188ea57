pub mod scores;
pub mod session_players;
pub mod sessions;
pub mod templates;

pub use scores::Entity as Scores;
pub use session_players::Entity as SessionPlayers;
pub use sessions::Entity as Sessions;
pub use templates::Entity as Templates;
