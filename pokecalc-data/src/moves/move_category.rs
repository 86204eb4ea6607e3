use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The damage class of a move.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    #[string = "physical"]
    #[alias = "ぶつり"]
    Physical,
    #[string = "special"]
    #[alias = "とくしゅ"]
    Special,
    #[string = "status"]
    #[alias = "へんか"]
    #[default]
    Status,
}
