use clap::{Args, Parser, Subcommand, ValueEnum};
use spdlib::{
    account_number_to_iban,
    error::{Result, SpdError},
    formats::{csv::Csv, json::Json},
    process,
    traits::{ReadFormat, WriteFormat},
    Outcome, PaymentRequest,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

/// Код выхода, когда запрос не прошёл валидацию.
const EXIT_REJECTED: u8 = 2;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "spd", version, about = "Строка QR-платежа (SPD) из чешских реквизитов")]
struct Cli {
    /// Подробность логов: -v, -vv, -vvv
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Номер счёта -> IBAN
    Iban {
        /// Счёт в виде [prefix-]number/bankCode
        account: String,
    },
    /// Проверить поля и напечатать SPD-строку
    Encode(Fields),
    /// Пакетная обработка: по одной JSON-строке результата на запрос
    Batch {
        /// Входной файл (по умолчанию stdin)
        #[arg(short = 'i', long = "input")]
        input: Option<String>,

        /// Выходной файл (по умолчанию stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,

        /// Формат входа
        #[arg(long = "in-format", value_enum, default_value = "json")]
        in_format: Fmt,
    },
}

/// Обязательность полей проверяет валидатор, а не clap.
#[derive(Args, Debug)]
struct Fields {
    #[arg(long)]
    acc: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    am: Option<f64>,
    #[arg(long)]
    cc: Option<String>,
    #[arg(long)]
    vs: Option<String>,
    #[arg(long)]
    ss: Option<String>,
    #[arg(long)]
    ks: Option<String>,
    #[arg(long)]
    dt: Option<String>,
    #[arg(long)]
    msg: Option<String>,
    /// Имя получателя
    #[arg(long)]
    rec: Option<String>,
}

impl From<Fields> for PaymentRequest {
    fn from(f: Fields) -> Self {
        PaymentRequest {
            acc: f.acc,
            rec: f.rec,
            am: f.am,
            cc: f.cc,
            vs: f.vs,
            ss: f.ss,
            ks: f.ks,
            dt: f.dt,
            msg: f.msg,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Cmd::Iban { account } => match account_number_to_iban(&account) {
            Ok(iban) => {
                println!("{iban}");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{e}");
                Ok(ExitCode::FAILURE)
            }
        },
        Cmd::Encode(fields) => {
            let req = PaymentRequest::from(fields);
            match process(&req) {
                Outcome::Encoded { spd } => {
                    println!("{spd}");
                    Ok(ExitCode::SUCCESS)
                }
                Outcome::Rejected { errors } => {
                    println!("{}", serde_json::to_string_pretty(&errors)?);
                    Ok(ExitCode::from(EXIT_REJECTED))
                }
                Outcome::Failed { error } => {
                    eprintln!("{error}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Cmd::Batch { input, output, in_format } => batch(input, output, in_format),
    }
}

fn batch(input: Option<String>, output: Option<String>, in_format: Fmt) -> Result<ExitCode> {
    // reader
    let reader: Box<dyn io::Read> = match input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let reqs = match in_format {
        Fmt::Json => Json::read(br),
        Fmt::Csv => Csv::read(br),
    }?;

    let outcomes: Vec<Outcome> = reqs.iter().map(process).collect();
    let rejected = outcomes
        .iter()
        .filter(|o| !matches!(o, Outcome::Encoded { .. }))
        .count();
    log::info!("{} request(s), {rejected} not encoded", outcomes.len());

    // writer
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Json::write(&mut writer, &outcomes)?;
    writer.flush().map_err(SpdError::from)?;

    Ok(if rejected == 0 { ExitCode::SUCCESS } else { ExitCode::from(EXIT_REJECTED) })
}
