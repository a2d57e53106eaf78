use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

pub const PROPERTIES: &str = r#"[
  {
    "id": "A",
    "name": "Apt. Balmes 122",
    "status": "Llogat",
    "ibi_cost_annual": 450,
    "who_pays_ibi": "Propietari",
    "garbage_tax_annual": 120,
    "who_pays_garbage": "Propietari"
  },
  { "id": "B", "name": "Casa Vila", "status": "Buit", "ibi_cost_annual": 300, "who_pays_ibi": "Llogater" }
]"#;

pub const TRANSACTIONS: &str = r#"[
  { "id": "t1", "type": "Ingrés", "amount": 1200, "date": "2024-03-01", "property_id": "A", "status": "Pagat", "category": "Lloguer", "description": "Lloguer Març" },
  { "id": "t2", "type": "Despesa", "amount": 150, "date": "2024-03-15", "property_id": "A", "status": "Pagat", "category": "Manteniment", "description": "Reparació fontaneria" },
  { "id": "t3", "type": "Despesa", "amount": 80, "date": "2023-11-02", "property_id": "B", "status": "Pendent" },
  { "id": "t4", "type": "Ingrés", "amount": 500, "date": "not a date", "property_id": "ghost" }
]"#;

pub const CONTRACTS: &str = r#"[
  { "id": "c1", "property_id": "A", "status": "Actiu", "rent_amount": 850, "start_date": "2024-01-01", "end_date": "2025-12-31" }
]"#;

/// A data directory with a small portfolio plus an unused config path.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let data = dir.path().join("data");
        fs::create_dir_all(&data).expect("create data dir");
        fs::write(data.join("properties.json"), PROPERTIES).expect("write properties");
        fs::write(data.join("transactions.json"), TRANSACTIONS).expect("write transactions");
        fs::write(data.join("contracts.json"), CONTRACTS).expect("write contracts");
        Self { dir }
    }

    pub fn data_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("data")
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.dir.path().join("config.json")
    }

    /// Replaces or adds one exported collection in the data directory.
    pub fn write_data(&self, file: &str, json: &str) {
        fs::write(self.data_dir().join(file), json).expect("write data file");
    }

    pub fn write_config(&self, json: &str) {
        fs::write(self.config_path(), json).expect("write config");
    }

    /// The CLI pointed at this fixture, colors off.
    pub fn cli(&self) -> Command {
        command_for(&self.data_dir(), &self.config_path())
    }
}

pub fn command_for(data: &Path, config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rentbook_cli").expect("binary built");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--data")
        .arg(data)
        .arg("--config")
        .arg(config);
    cmd
}
