pub mod http_repo;
pub mod skill;
