//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use pokedex_entity::Pokemon;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One table row per record.
#[derive(Debug, Tabled)]
struct PokemonRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    types: String,
    #[tabled(rename = "HP")]
    hp: i32,
    #[tabled(rename = "Atk")]
    attack: i32,
    #[tabled(rename = "Def")]
    defense: i32,
    #[tabled(rename = "SpA")]
    special_attack: i32,
    #[tabled(rename = "SpD")]
    special_defense: i32,
    #[tabled(rename = "Spe")]
    speed: i32,
}

impl From<&Pokemon> for PokemonRow {
    fn from(p: &Pokemon) -> Self {
        Self {
            id: p.id,
            name: p.name.english.clone(),
            types: p.types.join("/"),
            hp: p.base.hp,
            attack: p.base.attack,
            defense: p.base.defense,
            special_attack: p.base.special_attack,
            special_defense: p.base.special_defense,
            speed: p.base.speed,
        }
    }
}

/// Print records as a table, or as the full JSON documents
pub fn print_records(records: &[Pokemon], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No results found.");
            } else {
                let rows: Vec<PokemonRow> = records.iter().map(PokemonRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => print_json(records),
    }
}

/// Print one record
pub fn print_record(pokemon: &Pokemon, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            print_kv("ID", &pokemon.id.to_string());
            print_kv("English", &pokemon.name.english);
            print_kv("French", &pokemon.name.french);
            print_kv("Japanese", &pokemon.name.japanese);
            print_kv("Chinese", &pokemon.name.chinese);
            print_kv("Type", &pokemon.types.join(", "));
            for stat in pokedex_entity::Stat::ALL {
                print_kv(stat.field_name(), &pokemon.base.get(stat).to_string());
            }
            print_kv("Image", &pokemon.image);
        }
        OutputFormat::Json => print_json(pokemon),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<16} {}", format!("{key}:"), value);
}
