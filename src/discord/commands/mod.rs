mod rank;

pub use rank::rank;
