pub mod cms_fields;
pub mod collection;
pub mod entities;

pub use collection::Collection;
pub use entities::{
    Certification, CollectionEntity, Experience, Expertise, Project, Skill, SocialIcon,
    SocialLink, Statistic,
};
