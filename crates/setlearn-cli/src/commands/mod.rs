pub mod init;
pub mod like;
pub mod list;
pub mod normalize;
pub mod particles;
pub mod quiz;
pub mod validate;
pub mod venn;
