//! Command-line interface for standard atmosphere and airspeed
//! conversions: single-point lookups, pressure altitude, and CSV batch
//! processing.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use atmospeed_core::{
    pressure_altitude, AtmosphericPoint, LengthUnit, PressureUnit, Speed, SpeedType, SpeedUnit,
    TemperatureUnit,
};

#[derive(Parser, Debug)]
#[command(
    name = "atmospeed",
    version,
    about = "Standard atmosphere properties and airspeed conversions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Single-point speed conversion or atmosphere lookup.
    Convert(ConvertArgs),
    /// Calculate pressure altitude from elevation and altimeter setting.
    PressureAlt(PressureAltArgs),
    /// Batch speed conversion from a CSV file.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Pressure altitude.
    #[arg(long)]
    hp: f64,

    /// Temperature (delta ISA by default, or OAT with --oat).
    #[arg(long)]
    temp: f64,

    /// Treat --temp as OAT instead of delta ISA.
    #[arg(long)]
    oat: bool,

    /// Altitude unit.
    #[arg(long, default_value = "ft")]
    alt_unit: LengthUnit,

    /// Temperature unit.
    #[arg(long, default_value = "C")]
    temp_unit: TemperatureUnit,

    /// Speed value to convert.
    #[arg(long)]
    speed: Option<f64>,

    /// Input speed type.
    #[arg(long = "from")]
    from_type: Option<SpeedType>,

    /// Output speed type. Omit to print every other type.
    #[arg(long = "to")]
    to_type: Option<SpeedType>,

    /// Speed unit.
    #[arg(long, default_value = "kts")]
    speed_unit: SpeedUnit,

    /// Print atmosphere properties instead of a speed conversion.
    #[arg(long)]
    atmo: bool,
}

#[derive(Args, Debug)]
struct PressureAltArgs {
    /// Airport elevation.
    #[arg(long)]
    elevation: f64,

    /// Altimeter setting (QNH).
    #[arg(long)]
    altimeter: f64,

    /// Elevation unit.
    #[arg(long, default_value = "ft")]
    elev_unit: LengthUnit,

    /// Altimeter pressure unit.
    #[arg(long, default_value = "inHg")]
    altimeter_unit: PressureUnit,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Input CSV file path.
    input: PathBuf,

    /// Output CSV file path.
    output: PathBuf,

    /// Target speed type.
    #[arg(long = "to")]
    to_type: SpeedType,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert(args) => handle_convert(&args),
        Command::PressureAlt(args) => handle_pressure_alt(&args),
        Command::Batch(args) => handle_batch(&args),
    }
}

fn handle_convert(args: &ConvertArgs) -> Result<()> {
    let point = AtmosphericPoint::new(
        args.hp,
        args.temp,
        !args.oat,
        args.alt_unit,
        args.temp_unit,
    )
    .context("invalid atmospheric point")?;

    if args.atmo {
        println!("theta  = {:.4}", point.theta());
        println!("delta  = {:.4}", point.delta());
        println!("sigma  = {:.4}", point.sigma());
        println!("OAT    = {:.2} {}", point.oat(), point.temp_unit());
        println!("ISA    = {:.2} {}", point.isa_temperature(), point.temp_unit());
        println!("dISA   = {:.2} {}", point.delta_isa(), point.temp_unit());
        println!("a      = {:.1} kts", point.speed_of_sound(SpeedUnit::Kts));
        return Ok(());
    }

    let (Some(value), Some(from_type)) = (args.speed, args.from_type) else {
        bail!("--speed and --from are required for speed conversion");
    };

    let speed = Speed::new(value, from_type, args.speed_unit);
    let targets: Vec<SpeedType> = match args.to_type {
        Some(to_type) => vec![to_type],
        None => [SpeedType::Cas, SpeedType::Eas, SpeedType::Tas, SpeedType::Mach]
            .into_iter()
            .filter(|t| *t != from_type)
            .collect(),
    };

    let labelled = targets.len() > 1;
    for target in targets {
        let result = convert_to(&speed, &point, target);
        let label = if labelled {
            format!(" {}", target.as_str().to_uppercase())
        } else {
            String::new()
        };
        if target == SpeedType::Mach {
            println!("{result:.4} Mach");
        } else {
            println!("{result:.1} {}{label}", args.speed_unit);
        }
    }
    Ok(())
}

fn handle_pressure_alt(args: &PressureAltArgs) -> Result<()> {
    let hp = pressure_altitude(
        args.elevation,
        args.altimeter,
        args.elev_unit,
        args.altimeter_unit,
    );
    println!("{hp:.1} {}", args.elev_unit);
    Ok(())
}

fn handle_batch(args: &BatchArgs) -> Result<()> {
    let rows = process_batch(&args.input, &args.output, args.to_type)?;
    println!("Processed {rows} rows -> {}", args.output.display());
    Ok(())
}

/// Run one target-type conversion over every row of `input`, appending a
/// `<type>_result` column, and write the result to `output`. Returns the
/// number of rows processed. The first bad row aborts the batch.
fn process_batch(input: &Path, output: &Path, to_type: SpeedType) -> Result<usize> {
    let mut reader = csv::Reader::from_path(input)
        .with_context(|| format!("failed to open input CSV {}", input.display()))?;
    let headers = reader.headers().context("failed to read CSV header")?.clone();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let required = |name: &'static str| {
        column(name).with_context(|| format!("input CSV is missing required column {name:?}"))
    };
    let hp_col = required("hp")?;
    let temperature_col = required("temperature")?;
    let speed_value_col = required("speed_value")?;
    let speed_type_col = required("speed_type")?;
    let alt_unit_col = column("alt_unit");
    let temp_unit_col = column("temp_unit");
    let speed_unit_col = column("speed_unit");
    let temp_is_delta_isa_col = column("temp_is_delta_isa");

    let result_col = format!("{to_type}_result");
    let mut out_headers = headers.clone();
    out_headers.push_field(&result_col);

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("failed to create output CSV {}", output.display()))?;
    writer
        .write_record(&out_headers)
        .context("failed to write CSV header")?;

    let mut rows = 0_usize;
    for (index, record) in reader.records().enumerate() {
        let line = index + 2; // 1-based, after the header row
        let record = record.with_context(|| format!("failed to read CSV row at line {line}"))?;

        let result = convert_record(
            &record,
            to_type,
            RowColumns {
                hp: hp_col,
                temperature: temperature_col,
                speed_value: speed_value_col,
                speed_type: speed_type_col,
                alt_unit: alt_unit_col,
                temp_unit: temp_unit_col,
                speed_unit: speed_unit_col,
                temp_is_delta_isa: temp_is_delta_isa_col,
            },
        )
        .with_context(|| format!("bad row at line {line}"))?;

        let mut out = record.clone();
        out.push_field(&format!("{result:.4}"));
        writer
            .write_record(&out)
            .with_context(|| format!("failed to write CSV row at line {line}"))?;
        rows += 1;
    }
    writer.flush().context("failed to flush output CSV")?;

    tracing::info!(rows, output = %output.display(), "batch conversion complete");
    Ok(rows)
}

/// Header positions for a batch row. The unit columns are optional.
#[derive(Clone, Copy)]
struct RowColumns {
    hp: usize,
    temperature: usize,
    speed_value: usize,
    speed_type: usize,
    alt_unit: Option<usize>,
    temp_unit: Option<usize>,
    speed_unit: Option<usize>,
    temp_is_delta_isa: Option<usize>,
}

fn convert_record(
    record: &csv::StringRecord,
    to_type: SpeedType,
    columns: RowColumns,
) -> Result<f64> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();
    let optional = |idx: Option<usize>| idx.map(field).filter(|v| !v.is_empty());

    let hp: f64 = field(columns.hp).parse().context("invalid hp")?;
    let temperature: f64 = field(columns.temperature)
        .parse()
        .context("invalid temperature")?;
    let speed_value: f64 = field(columns.speed_value)
        .parse()
        .context("invalid speed_value")?;
    let speed_type: SpeedType = field(columns.speed_type)
        .to_lowercase()
        .parse()
        .context("invalid speed_type")?;

    let alt_unit: LengthUnit = optional(columns.alt_unit)
        .map_or(Ok(LengthUnit::Ft), str::parse)
        .context("invalid alt_unit")?;
    let temp_unit: TemperatureUnit = optional(columns.temp_unit)
        .map_or(Ok(TemperatureUnit::C), str::parse)
        .context("invalid temp_unit")?;
    let speed_unit: SpeedUnit = optional(columns.speed_unit)
        .map_or(Ok(SpeedUnit::Kts), str::parse)
        .context("invalid speed_unit")?;
    let temp_is_delta_isa = optional(columns.temp_is_delta_isa)
        .is_none_or(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"));

    let point = AtmosphericPoint::new(hp, temperature, temp_is_delta_isa, alt_unit, temp_unit)
        .context("invalid atmospheric point")?;
    let speed = Speed::new(speed_value, speed_type, speed_unit);
    Ok(convert_to(&speed, &point, to_type))
}

fn convert_to(speed: &Speed, point: &AtmosphericPoint, target: SpeedType) -> f64 {
    match target {
        SpeedType::Cas => speed.to_cas(point),
        SpeedType::Eas => speed.to_eas(point),
        SpeedType::Tas => speed.to_tas(point),
        SpeedType::Mach => speed.to_mach(point),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
