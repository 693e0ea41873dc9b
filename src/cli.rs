use std::path::PathBuf;

use clap::{Parser, Subcommand};
use time_decoder::zones::DEFAULT_ZONEINFO_DIR;
use time_decoder::Format;

const ASCII_LOGO: &str = r#"
     _____ _                ____                     _
    |_   _(_)_ __ ___   ___|  _ \  ___  ___ ___   __| | ___ _ __
      | | | | '_ ` _ \ / _ \ | | |/ _ \/ __/ _ \ / _` |/ _ \ '__|
      | | | | | | | | |  __/ |_| |  __/ (_| (_) | (_| |  __/ |
      |_| |_|_| |_| |_|\___|____/ \___|\___\___/ \__,_|\___|_|
"#;

const EXAMPLES: &str = r#"
ПРИМЕРЫ ИСПОЛЬЗОВАНИЯ:

  1. КОНВЕРТАЦИЯ (Convert)
     Hex-метка из дампа (32 бита, Big Endian) в UTC, локальное время и Europe/Moscow:
     TimeDecoder convert --input 0x6553F100 --format unix-hex-be32 --tz Europe/Moscow

     FILETIME из реестра (байты как в hex-редакторе, Little Endian):
     TimeDecoder convert -i "00 00 6D C6 47 17 DA 01" -f filetime-le

  2. УГАДЫВАНИЕ (Guess)
     Проверить значение во всех форматах (показываются только даты 1970-2040):
     TimeDecoder guess --input 1700000000

     То же в JSONL (1 строка - 1 совпадение):
     TimeDecoder guess -i 65:53:F1:00 --json

  3. СПРАВОЧНИКИ
     TimeDecoder formats
     TimeDecoder zones --filter "Europe/*"
"#;

#[derive(Parser, Debug)]
#[command(name = "TimeDecoder")]
#[command(version = "1.0")]
#[command(before_help = ASCII_LOGO)]
#[command(about = "DFIR tool for decoding raw timestamps (Unix, FILETIME)")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Каталог базы часовых поясов (zoneinfo)
    #[arg(long, global = true, env = "TZDIR", default_value = DEFAULT_ZONEINFO_DIR)]
    pub zoneinfo: PathBuf,

    /// Использовать встроенную базу часовых поясов вместо zoneinfo хоста
    #[arg(long, global = true)]
    pub bundled_zones: bool,

    /// Подробный лог в stderr (уровень debug, если RUST_LOG не задан)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Декодирует метку в одном формате: UTC, локальное и целевое время
    Convert {
        /// Значение метки (допускаются 0x, пробелы и двоеточия между байтами)
        #[arg(short, long, allow_hyphen_values = true)]
        input: String,
        /// Исходный формат
        #[arg(short, long, value_enum, default_value_t = Format::UnixHexBE32)]
        format: Format,
        /// Целевой часовой пояс (по умолчанию America/Los_Angeles или первый из базы)
        #[arg(short, long)]
        tz: Option<String>,
        /// Не показывать целевое время
        #[arg(long, conflicts_with = "tz")]
        no_target: bool,
        /// Вывод в JSONL
        #[arg(short, long)]
        json: bool,
    },
    /// Пробует все форматы и показывает правдоподобные даты (1970 - 2040)
    Guess {
        /// Значение метки
        #[arg(short, long, allow_hyphen_values = true)]
        input: String,
        /// Вывод в JSONL (1 строка - 1 совпадение)
        #[arg(short, long)]
        json: bool,
    },
    /// Список поддерживаемых форматов
    Formats,
    /// Список часовых поясов из базы
    Zones {
        /// Glob-фильтр по имени (* и ?), без учёта регистра
        #[arg(long)]
        filter: Option<String>,
    },
}
