mod developed;

pub use developed::{BendContribution, DevelopedLength, DevelopedLengthReport};
