use std::fmt;

use ahash::{
    HashMap,
    HashMapExt,
};
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move.
///
/// Types serialize to their English name, but the Japanese name is accepted everywhere a type is
/// read.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[alias = "ノーマル"]
    #[default]
    Normal,
    #[string = "Fighting"]
    #[alias = "かくとう"]
    Fighting,
    #[string = "Flying"]
    #[alias = "ひこう"]
    Flying,
    #[string = "Poison"]
    #[alias = "どく"]
    Poison,
    #[string = "Ground"]
    #[alias = "じめん"]
    Ground,
    #[string = "Rock"]
    #[alias = "いわ"]
    Rock,
    #[string = "Bug"]
    #[alias = "むし"]
    Bug,
    #[string = "Ghost"]
    #[alias = "ゴースト"]
    Ghost,
    #[string = "Steel"]
    #[alias = "はがね"]
    Steel,
    #[string = "Fire"]
    #[alias = "ほのお"]
    Fire,
    #[string = "Water"]
    #[alias = "みず"]
    Water,
    #[string = "Grass"]
    #[alias = "くさ"]
    Grass,
    #[string = "Electric"]
    #[alias = "でんき"]
    Electric,
    #[string = "Psychic"]
    #[alias = "エスパー"]
    Psychic,
    #[string = "Ice"]
    #[alias = "こおり"]
    Ice,
    #[string = "Dragon"]
    #[alias = "ドラゴン"]
    Dragon,
    #[string = "Dark"]
    #[alias = "あく"]
    Dark,
    #[string = "Fairy"]
    #[alias = "フェアリー"]
    Fairy,
    /// Sentinel for "no type", used for an unset Tera Type.
    #[string = "None"]
    #[alias = "なし"]
    None,
}

impl Type {
    /// All real elemental types, excluding [`Type::None`].
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    /// The Japanese name of the type, as displayed in game.
    pub fn japanese_name(&self) -> &'static str {
        match self {
            Self::Normal => "ノーマル",
            Self::Fighting => "かくとう",
            Self::Flying => "ひこう",
            Self::Poison => "どく",
            Self::Ground => "じめん",
            Self::Rock => "いわ",
            Self::Bug => "むし",
            Self::Ghost => "ゴースト",
            Self::Steel => "はがね",
            Self::Fire => "ほのお",
            Self::Water => "みず",
            Self::Grass => "くさ",
            Self::Electric => "でんき",
            Self::Psychic => "エスパー",
            Self::Ice => "こおり",
            Self::Dragon => "ドラゴン",
            Self::Dark => "あく",
            Self::Fairy => "フェアリー",
            Self::None => "なし",
        }
    }
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The multiplier as a fraction, `(numerator, denominator)`.
    pub fn fraction(&self) -> (u64, u64) {
        match self {
            Self::None => (0, 1),
            Self::Weak => (1, 2),
            Self::Normal => (1, 1),
            Self::Strong => (2, 1),
        }
    }
}

impl From<f32> for TypeEffectiveness {
    fn from(value: f32) -> Self {
        if value < 0f32 || (value).abs() < f32::EPSILON {
            Self::None
        } else if value < 0.5 || (value - 0.5).abs() < f32::EPSILON {
            Self::Weak
        } else if value < 1f32 || (value - 1f32).abs() < f32::EPSILON {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl From<TypeEffectiveness> for f32 {
    fn from(value: TypeEffectiveness) -> Self {
        match value {
            TypeEffectiveness::None => 0f32,
            TypeEffectiveness::Weak => 0.5,
            TypeEffectiveness::Normal => 1f32,
            TypeEffectiveness::Strong => 2f32,
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self {
            Self::Weak => serializer.serialize_f32(f32::from(*self)),
            _ => serializer.serialize_u32(f32::from(*self) as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_f32<E>(self, v: f32) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f32(TypeEffectivenessVisitor)
    }
}

/// A type table, which contains type effectiveness information for types against some other value.
///
/// The key here is the attacking type.
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// A type chart, which contains all type effectiveness information for types against other types.
///
/// The chart is sparse: a missing entry means normal effectiveness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    pub fn from_filled(types: TypeTable<Type>) -> Self {
        Self { types }
    }

    /// Looks up the effectiveness of a single attacking type against a single defending type.
    pub fn effectiveness(&self, offense: Type, defense: Type) -> TypeEffectiveness {
        self.types
            .get(&offense)
            .and_then(|row| row.get(&defense))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod type_effectiveness_test {
    use ahash::HashMap;

    use crate::{
        Type,
        TypeChart,
        TypeEffectiveness,
        TypeTable,
        test_util::test_deserialization,
    };

    #[test]
    fn deserializes_from_number() {
        test_deserialization("0", TypeEffectiveness::None);
        test_deserialization("0.5", TypeEffectiveness::Weak);
        test_deserialization("1", TypeEffectiveness::Normal);
        test_deserialization("2", TypeEffectiveness::Strong);
    }

    #[test]
    fn deserializes_type_chart_with_japanese_keys() {
        let str = r#"{
           "types": {
                "ほのお": {
                    "くさ": 2,
                    "みず": 0.5
                }
            }
        }"#;
        let tc = serde_json::from_str::<TypeChart>(str).unwrap();
        let expected = TypeChart::from_filled(TypeTable::from_iter([(
            Type::Fire,
            HashMap::from_iter([
                (Type::Grass, TypeEffectiveness::Strong),
                (Type::Water, TypeEffectiveness::Weak),
            ]),
        )]));
        assert_eq!(tc, expected)
    }

    #[test]
    fn missing_entries_are_normal() {
        let chart = TypeChart::from_filled(TypeTable::from_iter([(
            Type::Normal,
            HashMap::from_iter([(Type::Ghost, TypeEffectiveness::None)]),
        )]));
        assert_eq!(
            chart.effectiveness(Type::Normal, Type::Ghost),
            TypeEffectiveness::None
        );
        assert_eq!(
            chart.effectiveness(Type::Normal, Type::Water),
            TypeEffectiveness::Normal
        );
        assert_eq!(
            chart.effectiveness(Type::Fire, Type::Grass),
            TypeEffectiveness::Normal
        );
    }
}
