use anyhow::Result;
use clap::Subcommand;
use envelope_core::{format_bitrate, format_bytes};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum FormatKind {
    /// Scale a byte count (base 1000, or 1024 with --precise)
    Bytes {
        value: f64,
        #[arg(long)]
        precise: bool,
    },
    /// Scale a bits-per-second figure (always base 1000)
    Bitrate { value: f64 },
}

impl FormatKind {
    pub fn render(&self) -> String {
        match self {
            Self::Bytes { value, precise } => format_bytes(*value, *precise),
            Self::Bitrate { value } => format_bitrate(*value),
        }
    }
}

pub fn handle_format(kind: &FormatKind) -> Result<()> {
    println!("{}", kind.render());
    Ok(())
}
