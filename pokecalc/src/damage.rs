use std::fmt::Display;

use anyhow::Result;
use num::rational::Ratio;
use pokecalc_data::{
    DataStoreByName,
    MoveCategory,
    MoveData,
    ResolveSpeciesError,
    SpeciesData,
    Stat,
    Type,
    TypeChart,
    resolve_species,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    common::{
        Output,
        Range,
    },
    effectiveness::{
        EffectivenessMessage,
        Multiplier,
        defending_types,
        effectiveness,
    },
    state::{
        Field,
        Mon,
    },
    stats::{
        StatFormula,
        compute_mon_stat,
    },
};

/// Input for the damage calculator.
pub struct DamageCalculatorInput<'d> {
    /// Data source.
    pub data: &'d dyn DataStoreByName,
    /// Field state.
    pub field: Field,
    /// Attacker state.
    pub attacker: Mon,
    /// Defender state.
    pub defender: Mon,
    /// Name of the move being used.
    pub move_name: String,
}

/// The summarized result of a damage calculation.
///
/// The default value is the result reported when there is not enough data to calculate damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Representative damage, which is the midpoint of the damage range.
    pub damage: u64,
    pub min_damage: u64,
    pub max_damage: u64,
    /// Minimum damage as a percentage of the defender's HP, to one decimal place.
    pub min_percent: f64,
    /// Maximum damage as a percentage of the defender's HP, to one decimal place.
    pub max_percent: f64,
    pub effectiveness: Multiplier,
    pub critical_hit: bool,
}

impl Default for DamageResult {
    fn default() -> Self {
        Self {
            damage: 0,
            min_damage: 0,
            max_damage: 0,
            min_percent: 0.0,
            max_percent: 0.0,
            effectiveness: Ratio::from_integer(1),
            critical_hit: false,
        }
    }
}

impl DamageResult {
    /// Whether the result is the placeholder for missing data, as opposed to a real calculation
    /// that dealt no damage.
    pub fn is_insufficient_data(&self) -> bool {
        *self == Self::default()
    }

    /// The damage range.
    pub fn range(&self) -> Range<u64> {
        Range::new(self.min_damage, self.max_damage)
    }

    /// The damage range as a percentage of the defender's HP.
    pub fn percent_range(&self) -> Range<f64> {
        Range::new(self.min_percent, self.max_percent)
    }

    /// The message for the type effectiveness of the move.
    pub fn effectiveness_message(&self) -> EffectivenessMessage {
        EffectivenessMessage::from(self.effectiveness)
    }
}

/// Output of the damage calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageOutput {
    /// Move base power.
    pub base_power: Option<Output<u64>>,
    /// Attack stat.
    pub attack: Option<(Stat, Output<u64>)>,
    /// Defense stat.
    pub defense: Option<(Stat, Output<u64>)>,
    /// Type effectiveness modifier.
    pub type_effectiveness: Option<Output<Multiplier>>,
    /// The total HP of the defender.
    pub hp: u64,
    /// Maximum damage.
    pub damage: Output<u64>,
    /// Summarized result.
    pub result: DamageResult,
}

impl DamageOutput {
    fn insufficient_data<S>(reason: S) -> Self
    where
        S: Display,
    {
        Self {
            damage: Output::start(0u64, reason),
            ..Default::default()
        }
    }
}

impl Default for DamageOutput {
    fn default() -> Self {
        Self {
            base_power: None,
            attack: None,
            defense: None,
            type_effectiveness: None,
            hp: 1,
            damage: Output::from(0),
            result: DamageResult::default(),
        }
    }
}

struct DamageContext<'d> {
    field: &'d Field,
    attacker: &'d Mon,
    defender: &'d Mon,
    move_data: MoveData,
    attacker_species_data: SpeciesData,
    defender_species_data: SpeciesData,
}

fn resolve_or_none(data: &dyn DataStoreByName, name: &str) -> Result<Option<SpeciesData>> {
    match resolve_species(data, name) {
        Ok(species) => Ok(Some(species)),
        Err(ResolveSpeciesError::DataStore(err)) => Err(err),
        Err(err) => {
            log::debug!("Cannot calculate damage: {err}");
            Ok(None)
        }
    }
}

/// Calculates the damage range of a move.
///
/// Missing data (an unknown move or species, or a move without base power) is not an error: the
/// result is [`DamageResult::default`]. Errors only come from the data store itself.
pub fn calculate_damage(input: DamageCalculatorInput) -> Result<DamageOutput> {
    let Some(move_data) = input.data.get_move_by_name(&input.move_name)? else {
        return Ok(DamageOutput::insufficient_data(format!(
            "move {} not found",
            input.move_name
        )));
    };
    let Some(attacker_species_data) = resolve_or_none(input.data, &input.attacker.name)? else {
        return Ok(DamageOutput::insufficient_data("attacker not found"));
    };
    let Some(defender_species_data) = resolve_or_none(input.data, &input.defender.name)? else {
        return Ok(DamageOutput::insufficient_data("defender not found"));
    };
    let context = DamageContext {
        field: &input.field,
        attacker: &input.attacker,
        defender: &input.defender,
        move_data,
        attacker_species_data,
        defender_species_data,
    };
    let type_chart = input.data.get_type_chart()?;
    Ok(calculate_damage_internal(&context, &type_chart))
}

fn calculate_damage_internal(context: &DamageContext, type_chart: &TypeChart) -> DamageOutput {
    let Some(power) = context.move_data.damaging_power() else {
        return DamageOutput::insufficient_data("no base power");
    };
    let move_type = context.move_data.primary_type;
    let field = context.field;

    let mut base_power: Output<u64> = Output::start(power as u64, "base power");
    if field.terrain.boosts(move_type) {
        base_power.mul_floor(Ratio::new(13, 10), "terrain");
    }

    let (attack_stat, defense_stat) = match context.move_data.category {
        MoveCategory::Physical => (Stat::Atk, Stat::Def),
        _ => (Stat::SpAtk, Stat::SpDef),
    };

    let mut attack_boost = context.attacker.boosts.get(attack_stat);
    let mut defense_boost = context.defender.boosts.get(defense_stat);
    if field.critical_hit {
        attack_boost = attack_boost.max(0);
        defense_boost = defense_boost.min(0);
    }

    let attack = calculate_single_stat(
        context.attacker,
        &context.attacker_species_data,
        attack_stat,
        attack_boost,
    );
    let mut defense = calculate_single_stat(
        context.defender,
        &context.defender_species_data,
        defense_stat,
        defense_boost,
    );
    if *defense.value() == 0 {
        defense.set(1u64, "minimum defense");
    }
    let hp = compute_mon_stat(
        StatFormula::Simplified,
        &context.defender_species_data.base_stats,
        context.defender,
        Stat::HP,
    );

    let level_component = context.attacker.level * 2 / 5 + 2;
    let mut damage: Output<u64> = Output::start(level_component, "attacker level");
    damage.mul(*base_power.value(), "base power");
    damage.mul(*attack.value(), "attack");
    damage.div(*defense.value(), "defense");
    damage.div(50u64, "constant");
    damage.add(2u64, "constant");

    damage.mul_floor(field.weather.modifier(move_type), "weather");

    if field.critical_hit {
        damage.mul_floor(Ratio::new(3, 2), "crit");
    }

    damage.mul_floor(same_type_modifier(context), "stab");

    let types = defending_types(
        &context.defender_species_data,
        context.defender,
        context.field,
    );
    // The trail only describes each type. The value is always the combined multiplier.
    let trail = types.iter().filter_map(|defense_type| {
        let single = effectiveness(type_chart, move_type, &[*defense_type]);
        let reason = match EffectivenessMessage::from(single) {
            EffectivenessMessage::SuperEffective => "super effective",
            EffectivenessMessage::NotVeryEffective => "not very effective",
            EffectivenessMessage::NoEffect => "no effect",
            EffectivenessMessage::Normal => return None,
        };
        Some(format!("x{single} - {reason} against {defense_type}"))
    });
    let type_effectiveness: Output<Multiplier> =
        Output::new(effectiveness(type_chart, move_type, &types), trail);
    damage.mul_floor(*type_effectiveness.value(), "type effectiveness");

    let max_damage = *damage.value();
    let min_damage = (Ratio::from_integer(max_damage) * Ratio::new(85, 100))
        .floor()
        .to_integer();

    let result = DamageResult {
        damage: (min_damage + max_damage) / 2,
        min_damage,
        max_damage,
        min_percent: percent_of(min_damage, hp),
        max_percent: percent_of(max_damage, hp),
        effectiveness: *type_effectiveness.value(),
        critical_hit: field.critical_hit,
    };

    DamageOutput {
        base_power: Some(base_power),
        attack: Some((attack_stat, attack)),
        defense: Some((defense_stat, defense)),
        type_effectiveness: Some(type_effectiveness),
        hp,
        damage,
        result,
    }
}

fn calculate_single_stat(mon: &Mon, species: &SpeciesData, stat: Stat, boost: i8) -> Output<u64> {
    let mut value = Output::start(
        compute_mon_stat(StatFormula::Simplified, &species.base_stats, mon, stat),
        format!("{stat}"),
    );
    value.mul_floor(boost_modifier(boost), format!("boost {boost:+}"));
    value
}

/// The stat multiplier for a stage boost.
pub fn boost_modifier(boost: i8) -> Ratio<u64> {
    let boost = boost as i64;
    if boost >= 0 {
        Ratio::new((2 + boost) as u64, 2)
    } else {
        Ratio::new(2, (2 - boost) as u64)
    }
}

fn same_type_modifier(context: &DamageContext) -> Ratio<u64> {
    let move_type = context.move_data.primary_type;
    let natural = context.attacker_species_data.has_type(move_type);
    if context.field.terastallized {
        if context.attacker.tera_type != move_type || move_type == Type::None {
            Ratio::from_integer(1)
        } else if natural {
            Ratio::from_integer(2)
        } else {
            Ratio::new(3, 2)
        }
    } else if natural {
        Ratio::new(3, 2)
    } else {
        Ratio::from_integer(1)
    }
}

fn percent_of(damage: u64, hp: u64) -> f64 {
    Ratio::new(damage * 1000, hp.max(1)).round().to_integer() as f64 / 10.0
}

/// The shareable summary of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResultShare {
    pub attacker: String,
    pub defender: String,
    #[serde(rename = "move")]
    pub move_name: String,
    /// Representative damage.
    pub damage: u64,
    /// Effectiveness message.
    pub effectiveness: String,
}

impl BattleResultShare {
    pub fn new(attacker: &Mon, defender: &Mon, move_name: &str, result: &DamageResult) -> Self {
        Self {
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            move_name: move_name.to_owned(),
            damage: result.damage,
            effectiveness: result.effectiveness_message().to_string(),
        }
    }
}

#[cfg(test)]
mod damage_test {
    use anyhow::Result;
    use assert_matches::assert_matches;
    use num::rational::Ratio;
    use pokecalc_data::{
        BoostTable,
        DataStore,
        DataStoreByName,
        MoveCategory,
        MoveData,
        SpeciesData,
        Stat,
        StatTable,
        Type,
        TypeChart,
    };
    use pokecalc_test_utils::TestDataStore;

    use crate::{
        common::{
            Output,
            Range,
        },
        damage::{
            BattleResultShare,
            DamageCalculatorInput,
            DamageOutput,
            DamageResult,
            boost_modifier,
            calculate_damage,
        },
        state::{
            Field,
            Mon,
            Terrain,
            Weather,
        },
    };

    fn samurott() -> Mon {
        Mon {
            name: "ダイケンキ".to_owned(),
            evs: StatTable {
                atk: 252,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn mon(name: &str) -> Mon {
        Mon {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    fn calculate(
        data: &dyn DataStoreByName,
        field: Field,
        attacker: Mon,
        defender: Mon,
        move_name: &str,
    ) -> DamageResult {
        calculate_damage(DamageCalculatorInput {
            data,
            field,
            attacker,
            defender,
            move_name: move_name.to_owned(),
        })
        .unwrap()
        .result
    }

    #[test]
    fn same_type_physical_move_against_neutral_defender() {
        let data = TestDataStore::new().unwrap();
        assert_matches!(calculate_damage(DamageCalculatorInput {
            data: &data,
            field: Field::default(),
            attacker: samurott(),
            defender: mon("ミュウ"),
            move_name: "アクアテール".to_owned(),
        }), Ok(output) => {
            pretty_assertions::assert_eq!(output, DamageOutput {
                base_power: Some(Output::new(90u64, ["=90 - base power"])),
                attack: Some((Stat::Atk, Output::new(152u64, ["=152 - atk"]))),
                defense: Some((Stat::Def, Output::new(120u64, ["=120 - def"]))),
                type_effectiveness: Some(Output::from(Ratio::from_integer(1))),
                hp: 175,
                damage: Output::new(78u64, [
                    "=22 - attacker level",
                    "x90 - base power",
                    "x152 - attack",
                    "\u{00F7}120 - defense",
                    "\u{00F7}50 - constant",
                    "+2 - constant",
                    "x3/2 - stab",
                ]),
                result: DamageResult {
                    damage: 72,
                    min_damage: 66,
                    max_damage: 78,
                    min_percent: 37.7,
                    max_percent: 44.6,
                    effectiveness: Ratio::from_integer(1),
                    critical_hit: false,
                },
            });
        });
    }

    #[test]
    fn status_move_returns_insufficient_data() {
        let data = TestDataStore::new().unwrap();
        let result = calculate(
            &data,
            Field {
                critical_hit: true,
                weather: Weather::Sun,
                ..Default::default()
            },
            samurott(),
            mon("ミュウ"),
            "つるぎのまい",
        );
        assert_eq!(result, DamageResult::default());
        assert!(result.is_insufficient_data());
        assert_eq!(result.effectiveness, Ratio::from_integer(1));
        assert!(!result.critical_hit);
    }

    #[test]
    fn fixed_damage_move_returns_insufficient_data() {
        let data = TestDataStore::new().unwrap();
        assert!(
            calculate(
                &data,
                Field::default(),
                mon("ハピナス"),
                mon("ミュウ"),
                "ちきゅうなげ"
            )
            .is_insufficient_data()
        );
    }

    #[test]
    fn unknown_names_return_insufficient_data() {
        let data = TestDataStore::new().unwrap();
        assert!(
            calculate(
                &data,
                Field::default(),
                samurott(),
                mon("ミュウ"),
                "ハイパーボイス"
            )
            .is_insufficient_data()
        );
        assert!(
            calculate(
                &data,
                Field::default(),
                mon("ミュウツー"),
                mon("ミュウ"),
                "アクアテール"
            )
            .is_insufficient_data()
        );
        assert!(
            calculate(
                &data,
                Field::default(),
                samurott(),
                mon("ロトム（ハイパー）"),
                "アクアテール"
            )
            .is_insufficient_data()
        );
    }

    #[test]
    fn immune_defender_takes_no_damage() {
        let data = TestDataStore::new().unwrap();
        let result = calculate(
            &data,
            Field::default(),
            mon("ピカチュウ"),
            mon("サマヨール"),
            "でんこうせっか",
        );
        assert_eq!(result.damage, 0);
        assert_eq!(result.min_damage, 0);
        assert_eq!(result.max_damage, 0);
        assert_eq!(result.max_percent, 0.0);
        assert_eq!(result.effectiveness, Ratio::from_integer(0));
        assert!(!result.is_insufficient_data());
        assert_eq!(result.effectiveness_message().to_string(), "効果がないようだ...");
    }

    #[test]
    fn terastallized_natural_type_doubles_damage() {
        let data = TestDataStore::new().unwrap();
        let attacker = Mon {
            tera_type: Type::Water,
            ..samurott()
        };
        let base = calculate(
            &data,
            Field::default(),
            attacker.clone(),
            mon("ミュウ"),
            "アクアテール",
        );
        let tera = calculate(
            &data,
            Field {
                terastallized: true,
                ..Default::default()
            },
            attacker,
            mon("ミュウ"),
            "アクアテール",
        );
        // 52 base damage, x1.5 without and x2 with terastallization.
        assert_eq!(base.max_damage, 78);
        assert_eq!(tera.max_damage, 104);
        assert_eq!(tera.min_damage, 88);
        assert_eq!(
            Ratio::new(tera.max_damage, base.max_damage),
            Ratio::new(4, 3)
        );
    }

    #[test]
    fn terastallized_into_new_type_gets_same_type_bonus() {
        let data = TestDataStore::new().unwrap();
        let attacker = Mon {
            tera_type: Type::Ground,
            ..samurott()
        };
        let field = Field {
            terastallized: true,
            ..Default::default()
        };
        // Without terastallization, a ground move from a water type has no bonus.
        let base = calculate(
            &data,
            Field::default(),
            attacker.clone(),
            mon("ミュウ"),
            "じしん",
        );
        let tera = calculate(&data, field, attacker, mon("ミュウ"), "じしん");
        assert_eq!(base.max_damage, 57);
        assert_eq!(tera.max_damage, 85);

        // Terastallized into another type, the natural type loses its bonus.
        let attacker = Mon {
            tera_type: Type::Ground,
            ..samurott()
        };
        let tera = calculate(
            &data,
            Field {
                terastallized: true,
                ..Default::default()
            },
            attacker,
            mon("ミュウ"),
            "アクアテール",
        );
        assert_eq!(tera.max_damage, 52);
    }

    #[test]
    fn terastallized_defender_uses_tera_type() {
        let data = TestDataStore::new().unwrap();
        let defender = Mon {
            tera_type: Type::Fire,
            ..mon("ミュウ")
        };
        let result = calculate(
            &data,
            Field {
                terastallized: true,
                ..Default::default()
            },
            samurott(),
            defender,
            "アクアテール",
        );
        // The attacker has no tera type, so no same-type bonus applies.
        assert_eq!(result.max_damage, 104);
        assert_eq!(result.effectiveness, Ratio::from_integer(2));
        assert_eq!(result.effectiveness_message().to_string(), "効果はばつぐんだ！");
    }

    #[test]
    fn critical_hit_multiplies_damage_and_ignores_unfavorable_boosts() {
        let data = TestDataStore::new().unwrap();
        let crit = Field {
            critical_hit: true,
            ..Default::default()
        };

        let result = calculate(&data, crit.clone(), samurott(), mon("ミュウ"), "アクアテール");
        assert_eq!(result.max_damage, 117);
        assert_eq!(result.min_damage, 99);
        assert!(result.critical_hit);

        let weakened_attacker = Mon {
            boosts: BoostTable {
                atk: -2,
                ..Default::default()
            },
            ..samurott()
        };
        let result = calculate(
            &data,
            crit.clone(),
            weakened_attacker,
            mon("ミュウ"),
            "アクアテール",
        );
        assert_eq!(result.max_damage, 117);

        let boosted_defender = Mon {
            boosts: BoostTable {
                def: 2,
                ..Default::default()
            },
            ..mon("ミュウ")
        };
        let result = calculate(
            &data,
            crit,
            samurott(),
            boosted_defender.clone(),
            "アクアテール",
        );
        assert_eq!(result.max_damage, 117);

        let result = calculate(
            &data,
            Field::default(),
            samurott(),
            boosted_defender,
            "アクアテール",
        );
        assert_eq!(result.max_damage, 40);
    }

    #[test]
    fn weather_modifies_damage() {
        let data = TestDataStore::new().unwrap();
        let rain = Field {
            weather: Weather::Rain,
            ..Default::default()
        };
        let sun = Field {
            weather: Weather::Sun,
            ..Default::default()
        };
        assert_eq!(
            calculate(&data, rain, samurott(), mon("ミュウ"), "アクアテール").max_damage,
            117
        );
        assert_eq!(
            calculate(&data, sun, samurott(), mon("ミュウ"), "アクアテール").max_damage,
            39
        );
    }

    #[test]
    fn terrain_boosts_base_power() {
        let data = TestDataStore::new().unwrap();
        let electric = Field {
            terrain: Terrain::Electric,
            ..Default::default()
        };
        let output = calculate_damage(DamageCalculatorInput {
            data: &data,
            field: electric,
            attacker: mon("ピカチュウ"),
            defender: mon("ミュウ"),
            move_name: "10まんボルト".to_owned(),
        })
        .unwrap();
        assert_eq!(
            output.base_power,
            Some(Output::new(117u64, ["=90 - base power", "x13/10 - terrain"]))
        );
        assert_eq!(output.result.max_damage, 48);

        assert_eq!(
            calculate(
                &data,
                Field::default(),
                mon("ピカチュウ"),
                mon("ミュウ"),
                "10まんボルト"
            )
            .max_damage,
            37
        );
    }

    #[test]
    fn minimum_damage_is_85_percent_of_maximum() {
        let data = TestDataStore::new().unwrap();
        for (attacker, defender, move_name) in [
            ("ガブリアス", "ハピナス", "じしん"),
            ("ハバタクカミ", "ガブリアス", "ムーンフォース"),
            ("パオジアン", "ランドロス（れいじゅう）", "つららおとし"),
            ("ロトム（ウォッシュ）", "ダイケンキ", "ハイドロポンプ"),
            ("フシギダネ", "ヒトカゲ", "つるのムチ"),
        ] {
            let result = calculate(
                &data,
                Field::default(),
                mon(attacker),
                mon(defender),
                move_name,
            );
            assert!(!result.is_insufficient_data(), "{attacker} {move_name}");
            assert_eq!(
                result.min_damage,
                result.max_damage * 85 / 100,
                "{attacker} {move_name}"
            );
            assert_eq!(result.damage, (result.min_damage + result.max_damage) / 2);
            assert!(result.min_percent <= result.max_percent);
        }
    }

    #[test]
    fn damage_never_decreases_with_attack_boost() {
        let data = TestDataStore::new().unwrap();
        let mut last = 0;
        for boost in -6..=6 {
            let attacker = Mon {
                boosts: BoostTable {
                    atk: boost,
                    ..Default::default()
                },
                ..samurott()
            };
            let result = calculate(
                &data,
                Field::default(),
                attacker,
                mon("ミュウ"),
                "アクアテール",
            );
            assert!(result.min_damage >= last, "boost {boost}");
            last = result.min_damage;
        }
    }

    #[test]
    fn calculation_is_repeatable() {
        let data = TestDataStore::new().unwrap();
        let input = || DamageCalculatorInput {
            data: &data,
            field: Field {
                weather: Weather::Rain,
                critical_hit: true,
                ..Default::default()
            },
            attacker: mon("ロトム（ウォッシュ）"),
            defender: mon("ガブリアス"),
            move_name: "hydro-pump".to_owned(),
        };
        assert_eq!(
            calculate_damage(input()).unwrap(),
            calculate_damage(input()).unwrap()
        );
    }

    #[test]
    fn zero_defense_is_treated_as_one() {
        let mut data = TestDataStore::new().unwrap();
        data.add_fake_species(SpeciesData {
            name: "テスト".to_owned(),
            name_en: "test".to_owned(),
            base_stats: StatTable::filled(0),
            primary_type: Type::Normal,
            secondary_type: None,
            moves: Vec::from_iter(["たいあたり".to_owned()]),
            moves_en: Vec::from_iter(["tackle".to_owned()]),
            abilities: Vec::new(),
            abilities_en: Vec::new(),
        });
        let mut defender = Mon {
            name: "テスト".to_owned(),
            ivs: StatTable::default(),
            ..Default::default()
        };
        defender.nature_modifiers.def = 0.0;
        let output = calculate_damage(DamageCalculatorInput {
            data: &data,
            field: Field::default(),
            attacker: mon("ミュウ"),
            defender,
            move_name: "tackle".to_owned(),
        })
        .unwrap();
        assert_matches!(output.defense, Some((Stat::Def, defense)) => {
            assert_eq!(*defense.value(), 1);
        });
        assert!(output.result.max_damage > 0);
    }

    #[test]
    fn uses_fake_moves() {
        let mut data = TestDataStore::new().unwrap();
        data.add_fake_move(MoveData {
            name: "テストビーム".to_owned(),
            name_en: "test-beam".to_owned(),
            category: MoveCategory::Special,
            primary_type: Type::Psychic,
            base_power: Some(100),
            description: String::new(),
        });
        let result = calculate(
            &data,
            Field::default(),
            mon("ミュウ"),
            mon("ミュウ"),
            "テストビーム",
        );
        // floor(floor(22 * 100 * 120 / 120) / 50) + 2 = 46, x1.5 stab, x0.5 effectiveness.
        assert_eq!(result.max_damage, 34);
        assert_eq!(result.effectiveness, Ratio::new(1, 2));
    }

    #[test]
    fn data_store_errors_are_propagated() {
        struct BrokenDataStore;

        impl DataStore for BrokenDataStore {
            fn all_species(&self) -> Result<Vec<SpeciesData>> {
                Err(anyhow::Error::msg("broken"))
            }

            fn find_species(
                &self,
                _: &dyn Fn(&SpeciesData) -> bool,
            ) -> Result<Option<SpeciesData>> {
                Err(anyhow::Error::msg("broken"))
            }

            fn find_move(&self, _: &dyn Fn(&MoveData) -> bool) -> Result<Option<MoveData>> {
                Err(anyhow::Error::msg("broken"))
            }

            fn get_type_chart(&self) -> Result<TypeChart> {
                Err(anyhow::Error::msg("broken"))
            }

            fn get_species(&self, _: &str) -> Result<Option<SpeciesData>> {
                Err(anyhow::Error::msg("broken"))
            }

            fn get_move(&self, _: &str) -> Result<Option<MoveData>> {
                Err(anyhow::Error::msg("broken"))
            }
        }

        assert_matches!(
            calculate_damage(DamageCalculatorInput {
                data: &BrokenDataStore,
                field: Field::default(),
                attacker: samurott(),
                defender: mon("ミュウ"),
                move_name: "アクアテール".to_owned(),
            }),
            Err(err) => assert_eq!(err.to_string(), "broken")
        );
    }

    #[test]
    fn describes_effectiveness_against_each_type() {
        let data = TestDataStore::new().unwrap();
        let output = calculate_damage(DamageCalculatorInput {
            data: &data,
            field: Field::default(),
            attacker: mon("パオジアン"),
            defender: mon("ガブリアス"),
            move_name: "つららおとし".to_owned(),
        })
        .unwrap();
        assert_eq!(
            output.type_effectiveness,
            Some(Output::new(
                Ratio::from_integer(4),
                [
                    "x2 - super effective against Dragon",
                    "x2 - super effective against Ground",
                ]
            ))
        );
        assert_eq!(output.result.effectiveness, Ratio::from_integer(4));

        let output = calculate_damage(DamageCalculatorInput {
            data: &data,
            field: Field::default(),
            attacker: mon("ピカチュウ"),
            defender: mon("ランドロス"),
            move_name: "10まんボルト".to_owned(),
        })
        .unwrap();
        assert_eq!(
            output.type_effectiveness,
            Some(Output::new(
                Ratio::from_integer(0),
                [
                    "x0 - no effect against Ground",
                    "x2 - super effective against Flying",
                ]
            ))
        );
        assert_eq!(output.result.max_damage, 0);
    }

    #[test]
    fn boost_modifiers() {
        assert_eq!(boost_modifier(0), Ratio::from_integer(1));
        assert_eq!(boost_modifier(1), Ratio::new(3, 2));
        assert_eq!(boost_modifier(6), Ratio::from_integer(4));
        assert_eq!(boost_modifier(-1), Ratio::new(2, 3));
        assert_eq!(boost_modifier(-6), Ratio::new(1, 4));
    }

    #[test]
    fn result_ranges() {
        let result = DamageResult {
            damage: 72,
            min_damage: 66,
            max_damage: 78,
            min_percent: 37.7,
            max_percent: 44.6,
            ..Default::default()
        };
        assert_eq!(result.range(), Range::new(66, 78));
        assert_eq!(result.percent_range(), Range::new(37.7, 44.6));
        assert!(!result.is_insufficient_data());
    }

    #[test]
    fn serializes_share_payload() {
        let data = TestDataStore::new().unwrap();
        let attacker = samurott();
        let defender = mon("ミュウ");
        let result = calculate(
            &data,
            Field::default(),
            attacker.clone(),
            defender.clone(),
            "アクアテール",
        );
        let share = BattleResultShare::new(&attacker, &defender, "アクアテール", &result);
        pretty_assertions::assert_eq!(
            serde_json::to_value(&share).unwrap(),
            serde_json::json!({
                "attacker": "ダイケンキ",
                "defender": "ミュウ",
                "move": "アクアテール",
                "damage": 72,
                "effectiveness": "効果は普通だ...",
            })
        );
    }
}
