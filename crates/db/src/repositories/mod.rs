pub mod bid_repo;
pub mod center_repo;
pub mod form_repo;
pub mod map_repo;
pub mod news_repo;
pub mod service_repo;
pub mod support_repo;
pub mod support_tag_repo;
pub mod support_type_repo;

pub use bid_repo::BidRepo;
pub use center_repo::CenterRepo;
pub use form_repo::FormRepo;
pub use map_repo::MapRepo;
pub use news_repo::NewsRepo;
pub use service_repo::ServiceRepo;
pub use support_repo::SupportRepo;
pub use support_tag_repo::SupportTagRepo;
pub use support_type_repo::SupportTypeRepo;
