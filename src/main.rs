//! adifmt - validate, transform, and convert amateur radio logs
//!
//! # Commands
//!
//! ```bash
//! adifmt cat log1.adi log2.adx --output json      # Concatenate and convert
//! adifmt validate --required-fields CALL log.adi   # Check every field
//! adifmt find --if 'BAND=20m|40m' log.adi          # Filter records
//! adifmt sort --fields QSO_DATE,-TIME_ON log.adi   # Order records
//! adifmt save -o contest.log -o backup.adx log.adi # Write files
//! ```
//!
//! Inputs default to standard input; output goes to standard output as ADI
//! unless `--output` or a `save` path says otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use adif_multitool::adif::FieldOrder;
use adif_multitool::cmd::{self, count, edit, find, fix, infer, save, select, sort, validate, Context};
use adif_multitool::codec::{
    AdiConfig, AdxConfig, CabrilloConfig, CodecConfig, CsvConfig, ExchangeField, Format, JsonConfig,
    Separator, TsvConfig,
};
use adif_multitool::compare::parse_locale;
use adif_multitool::{spec, Error, Result};

#[derive(Parser)]
#[command(name = "adifmt", version)]
#[command(about = "Validate, transform, and convert ADIF amateur radio logs", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Format of every input (adi, adx, cabrillo, csv, tsv, json); inferred from file names otherwise
    #[arg(long, global = true, value_name = "FORMAT")]
    input: Option<Format>,

    /// Format of standard output (default: adi)
    #[arg(long, global = true, value_name = "FORMAT")]
    output: Option<Format>,

    /// Comma-separated fields to write first
    #[arg(long, global = true, value_name = "LIST")]
    field_order: Option<String>,

    /// BCP-47 locale for comparing international text
    #[arg(long, global = true, env = "ADIFMT_LOCALE", default_value = "", value_name = "BCP47")]
    locale: String,

    /// ADI separator between fields: space, newline, 2newline, tab
    #[arg(long, global = true, default_value = "space")]
    adi_field_separator: Separator,

    /// ADI separator between records: space, newline, 2newline, tab
    #[arg(long, global = true, default_value = "newline")]
    adi_record_separator: Separator,

    /// Write ADI tag names in lower case
    #[arg(long, global = true)]
    adi_lower_case: bool,

    /// Refuse non-ASCII ADI input and output
    #[arg(long, global = true)]
    adi_ascii_only: bool,

    /// Treat unknown ADI tags as comments
    #[arg(long, global = true)]
    adi_allow_unknown_tag: bool,

    /// Spaces per ADX nesting level, 0 for none
    #[arg(long, global = true, default_value = "1")]
    adx_indent: usize,

    /// Exchange sent, e.g. "rst:RST_SENT=59 exch:STX_STRING/STX?"
    #[arg(long, global = true, value_name = "EXCHANGE")]
    cabrillo_my_exchange: Option<String>,

    /// Exchange received, e.g. "rst:RST_RCVD=59 exch:STATE"
    #[arg(long, global = true, value_name = "EXCHANGE")]
    cabrillo_their_exchange: Option<String>,

    /// Separate Cabrillo QSO columns with tabs
    #[arg(long, global = true)]
    cabrillo_tab_delimiter: bool,

    /// Highest power (watts) for CATEGORY-POWER: QRP
    #[arg(long, global = true, value_name = "WATTS")]
    cabrillo_max_qrp_power: Option<f64>,

    /// Highest power (watts) for CATEGORY-POWER: LOW
    #[arg(long, global = true, value_name = "WATTS")]
    cabrillo_max_low_power: Option<f64>,

    /// Cabrillo header line, e.g. CLUB=Yankee Clipper Contest Club (repeatable)
    #[arg(long, global = true, value_name = "KEY=VALUE")]
    cabrillo_header: Vec<String>,

    /// End TSV lines with CRLF
    #[arg(long, global = true)]
    tsv_crlf: bool,

    /// Backslash-escape tabs, line breaks and backslashes in TSV values
    #[arg(long, global = true)]
    tsv_escape_special: bool,

    /// CSV field delimiter
    #[arg(long, global = true, default_value = ",", value_name = "CHAR")]
    csv_comma: char,

    /// Spaces per JSON nesting level, 0 for one line
    #[arg(long, global = true, default_value = "1")]
    json_indent: usize,

    /// Write numeric and boolean JSON values unquoted
    #[arg(long, global = true)]
    json_typed_output: bool,
}

#[derive(Args)]
struct Inputs {
    /// Input files, `-` for standard input (default: standard input)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Concatenate logs and write them out
    Cat {
        #[command(flatten)]
        inputs: Inputs,
    },

    /// Count records, optionally grouped by field values
    Count {
        /// Fields to group by
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        #[command(flatten)]
        inputs: Inputs,
    },

    /// Add, change, rename or remove fields
    Edit {
        /// FIELD=VALUE set only where the field is empty (repeatable)
        #[arg(long)]
        add: Vec<String>,

        /// FIELD=VALUE set on every record (repeatable)
        #[arg(long)]
        set: Vec<String>,

        /// OLD=NEW field rename (repeatable)
        #[arg(long)]
        rename: Vec<String>,

        /// Fields to remove
        #[arg(long, value_delimiter = ',')]
        remove: Vec<String>,

        /// Remove fields with empty values
        #[arg(long)]
        remove_blank: bool,

        #[command(flatten)]
        inputs: Inputs,
    },

    /// Keep records matching every condition
    Find {
        /// Condition such as CALL=W1AW, BAND>=40m, MODE=CW|SSB (repeatable)
        #[arg(long = "if", value_name = "COND")]
        conditions: Vec<String>,

        /// Condition that must not match (repeatable)
        #[arg(long = "if-not", value_name = "COND")]
        negated: Vec<String>,

        #[command(flatten)]
        inputs: Inputs,
    },

    /// Normalize dates, times, locations and enumeration case
    Fix {
        #[command(flatten)]
        inputs: Inputs,
    },

    /// Fill fields that follow from other fields
    Infer {
        /// Fields to fill (default: every inferable field)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        #[command(flatten)]
        inputs: Inputs,
    },

    /// Keep only some fields
    Select {
        /// Fields to keep, in output order
        #[arg(long, value_delimiter = ',', required = true)]
        fields: Vec<String>,

        #[command(flatten)]
        inputs: Inputs,
    },

    /// Sort records; prefix a field with - for descending order
    Sort {
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        fields: Vec<String>,

        #[command(flatten)]
        inputs: Inputs,
    },

    /// Validate every field, writing the log only if it has no errors
    Validate {
        /// Fields every record must have
        #[arg(long, value_delimiter = ',')]
        required_fields: Vec<String>,

        #[command(flatten)]
        inputs: Inputs,
    },

    /// Write the log to files, one format per file extension
    Save {
        /// Output file (repeatable)
        #[arg(short = 'o', long = "out", value_name = "PATH", required = true)]
        outputs: Vec<PathBuf>,

        /// Replace existing files
        #[arg(long)]
        overwrite: bool,

        /// Create missing directories
        #[arg(long)]
        create_dirs: bool,

        #[command(flatten)]
        inputs: Inputs,
    },
}

impl GlobalArgs {
    fn codecs(&self) -> Result<CodecConfig> {
        let mut cabrillo = CabrilloConfig::default();
        if let Some(ex) = &self.cabrillo_my_exchange {
            cabrillo.my_exchange = ExchangeField::parse_list(ex)?;
        }
        if let Some(ex) = &self.cabrillo_their_exchange {
            cabrillo.their_exchange = ExchangeField::parse_list(ex)?;
        }
        cabrillo.tab_delimiter = self.cabrillo_tab_delimiter;
        if let Some(w) = self.cabrillo_max_qrp_power {
            cabrillo.max_qrp_power = w;
        }
        if let Some(w) = self.cabrillo_max_low_power {
            cabrillo.max_low_power = w;
        }
        for h in &self.cabrillo_header {
            let (key, value) = h
                .split_once('=')
                .ok_or_else(|| Error::Usage(format!("expected KEY=VALUE, got {:?}", h)))?;
            cabrillo.headers.push((key.trim().to_ascii_uppercase(), value.trim().to_string()));
        }
        if !self.csv_comma.is_ascii() {
            return Err(Error::Usage(format!("CSV delimiter {:?} is not ASCII", self.csv_comma)));
        }

        Ok(CodecConfig {
            adi: AdiConfig {
                field_separator: self.adi_field_separator,
                record_separator: self.adi_record_separator,
                lower_case: self.adi_lower_case,
                ascii_only: self.adi_ascii_only,
                allow_unknown_tag: self.adi_allow_unknown_tag,
            },
            adx: AdxConfig { indent: self.adx_indent },
            cabrillo,
            csv: CsvConfig { comma: self.csv_comma as u8 },
            tsv: TsvConfig { crlf: self.tsv_crlf, escape_special: self.tsv_escape_special },
            json: JsonConfig { indent: self.json_indent, typed_output: self.json_typed_output },
        })
    }

    fn context(&self) -> Result<Context> {
        Ok(Context {
            codecs: self.codecs()?,
            input_format: self.input,
            output_format: self.output,
            field_order: self.field_order.as_deref().map(FieldOrder::parse).unwrap_or_default(),
            locale: parse_locale(&self.locale)?,
            now: None,
        })
    }
}

fn run(cli: Cli) -> Result<()> {
    spec::init()?;
    let ctx = cli.global.context()?;

    match cli.command {
        Commands::Cat { inputs } => {
            let mut log = ctx.read_inputs(&inputs.files)?;
            ctx.write_stdout(&mut log)
        }
        Commands::Count { fields, inputs } => {
            let fields = cmd::field_names(&fields)?;
            let log = ctx.read_inputs(&inputs.files)?;
            ctx.write_stdout(&mut count::count(&log, &fields))
        }
        Commands::Edit { add, set, rename, remove, remove_blank, inputs } => {
            let ops = edit::EditOps::parse(&add, &set, &rename, &remove, remove_blank)?;
            let mut log = ctx.read_inputs(&inputs.files)?;
            edit::edit(&mut log, &ops);
            ctx.write_stdout(&mut log)
        }
        Commands::Find { conditions, negated, inputs } => {
            let mut conds = conditions
                .iter()
                .map(|c| c.parse::<find::Condition>())
                .collect::<Result<Vec<_>>>()?;
            for c in &negated {
                conds.push(c.parse::<find::Condition>()?.negate());
            }
            let mut log = ctx.read_inputs(&inputs.files)?;
            find::find(&mut log, &conds, &ctx.locale)?;
            ctx.write_stdout(&mut log)
        }
        Commands::Fix { inputs } => {
            let mut log = ctx.read_inputs(&inputs.files)?;
            fix::fix(&mut log);
            ctx.write_stdout(&mut log)
        }
        Commands::Infer { fields, inputs } => {
            let fields = cmd::field_names(&fields)?;
            let mut log = ctx.read_inputs(&inputs.files)?;
            infer::infer(&mut log, &fields)?;
            ctx.write_stdout(&mut log)
        }
        Commands::Select { fields, inputs } => {
            let fields = cmd::field_names(&fields)?;
            let mut log = ctx.read_inputs(&inputs.files)?;
            select::select(&mut log, &fields);
            ctx.write_stdout(&mut log)
        }
        Commands::Sort { fields, inputs } => {
            let keys = fields
                .iter()
                .map(|f| f.parse::<sort::SortKey>())
                .collect::<Result<Vec<_>>>()?;
            let mut log = ctx.read_inputs(&inputs.files)?;
            sort::sort(&mut log, &keys, &ctx.locale)?;
            ctx.write_stdout(&mut log)
        }
        Commands::Validate { required_fields, inputs } => {
            let required = cmd::field_names(&required_fields)?;
            let mut log = ctx.read_inputs(&inputs.files)?;
            validate::validate(&log, &required, ctx.now())?;
            ctx.write_stdout(&mut log)
        }
        Commands::Save { outputs, overwrite, create_dirs, inputs } => {
            let mut log = ctx.read_inputs(&inputs.files)?;
            save::save(&ctx, &mut log, &outputs, save::SaveOptions { overwrite, create_dirs })
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("adifmt=warn,adif_multitool=warn"),
    )
    .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("adifmt: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
