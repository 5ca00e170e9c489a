pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli_config {
    use crate::config::storage::BUNDLED_RESOURCE;
    use crate::config::toml_config::TomlConfig;
    use crate::core::lego_sets::{NAME_LENGTH_THRESHOLD, TOP_NAMES_LIMIT, ZERO_PIECES_LIMIT};
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "brickset")]
    #[command(about = "Query a LEGO set catalog loaded from a JSON file")]
    pub struct CliConfig {
        /// Directory holding the catalog file; the bundled catalog is used when omitted
        #[arg(long, global = true)]
        pub data_dir: Option<String>,

        /// Catalog file name inside the data directory
        #[arg(long, global = true)]
        pub resource: Option<String>,

        /// Path to a TOML configuration file
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        /// Print query results as JSON
        #[arg(long, global = true)]
        pub json: bool,

        /// Emit log lines as JSON
        #[arg(long, global = true)]
        pub log_json: bool,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Option<Command>,
    }

    #[derive(Debug, Clone, PartialEq, Subcommand)]
    pub enum Command {
        /// Is there a set with at least N pieces?
        PiecesAtLeast { pieces: u32 },
        /// Distinct tags of the sets with this exact name
        Tags { name: String },
        /// Subthemes of this exact theme, joined into one line
        Subthemes { theme: String },
        /// Number to name of sets with exactly N pieces
        NumbersWithPieces { pieces: u32 },
        /// Set names grouped by theme
        ByTheme,
        /// First sets with zero pieces
        ZeroPieces {
            #[arg(long, default_value_t = ZERO_PIECES_LIMIT)]
            limit: usize,
        },
        /// Distinct themes starting with "A"
        ThemesA,
        /// Is there a theme containing this substring?
        ThemeContains { substring: String },
        /// Average name length of sets whose theme contains this substring
        AvgNameLength { substring: String },
        /// Sorted names longer than a threshold
        LongNames {
            #[arg(long, default_value_t = NAME_LENGTH_THRESHOLD)]
            min_len: usize,
            #[arg(long, default_value_t = TOP_NAMES_LIMIT)]
            limit: usize,
        },
        /// Run every query with the configured demo arguments
        Demo,
    }

    impl CliConfig {
        pub fn selected_command(&self) -> Command {
            self.command.clone().unwrap_or(Command::Demo)
        }

        /// Command-line values take precedence over the file.
        pub fn merge_into(&self, config: &mut TomlConfig) {
            if let Some(dir) = &self.data_dir {
                config.data.path = Some(dir.clone());
            }
            if let Some(resource) = &self.resource {
                config.data.resource = resource.clone();
            }
            if self.log_json {
                config.logging.json = true;
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn data_dir(&self) -> Option<&str> {
            self.data_dir.as_deref()
        }

        fn resource(&self) -> &str {
            self.resource.as_deref().unwrap_or(BUNDLED_RESOURCE)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(dir) = &self.data_dir {
                validation::validate_path("--data-dir", dir)?;
            }
            validation::validate_file_extension("--resource", self.resource(), &["json"])
        }
    }

}
