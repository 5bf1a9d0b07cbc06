pub mod export;
pub mod filter;
pub mod normalize;
pub mod sort;
