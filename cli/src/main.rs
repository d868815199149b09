mod client;
mod output;

use std::path::PathBuf;

use assessments::api::{self, SignupRequest};
use assessments::csv::{self, CsvError};
use assessments::validation::{self, SignupDraft};
use assessments::{ApiError, Assessment, MeasurementDraft, ModelKey, Session};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::client::ApiClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; run `diabetes-cli login` and pass --token or set DIABETES_TOKEN")]
    MissingToken,
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),
    #[error("{0}")]
    Invalid(String),
    #[error("record {0} not found")]
    RecordNotFound(String),
    #[error("invalid CSV: {0}")]
    Csv(#[from] CsvError),
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "diabetes-cli", about = "Diabetes risk API command-line client")]
struct Cli {
    #[arg(long, env = "DIABETES_API_BASE", default_value = api::DEFAULT_API_BASE)]
    base_url: String,

    #[arg(long, env = "DIABETES_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the session, including the bearer token.
    Login(LoginArgs),
    Signup(SignupArgs),
    VerifyEmail { token: String },
    ResendVerification { email: String },
    Records(RecordsCommand),
    /// Show evaluation metrics for every model.
    Models,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long, env = "DIABETES_PASSWORD")]
    password: String,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    email: String,
    #[arg(long, env = "DIABETES_PASSWORD")]
    password: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    phone_number: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date_of_birth: String,
    #[arg(long)]
    accept_terms: bool,
}

#[derive(Args, Debug)]
struct RecordsCommand {
    #[command(subcommand)]
    command: RecordsSubcommand,
}

#[derive(Subcommand, Debug)]
enum RecordsSubcommand {
    List {
        #[arg(long, default_value_t = ModelKey::default())]
        model: ModelKey,
        #[arg(long)]
        json: bool,
    },
    Show {
        id: String,
    },
    Add(MeasurementArgs),
    /// Change the given fields of a stored record; others keep their values.
    Update {
        id: String,
        #[command(flatten)]
        measurements: MeasurementArgs,
    },
    Delete {
        id: String,
    },
    /// Upload every row of a CSV file in one request.
    Import {
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
struct MeasurementArgs {
    #[arg(long)]
    pregnancies: Option<String>,
    #[arg(long)]
    glucose: Option<String>,
    #[arg(long)]
    blood_pressure: Option<String>,
    #[arg(long)]
    insulin: Option<String>,
    #[arg(long)]
    bmi: Option<String>,
    #[arg(long)]
    family_history: Option<bool>,
    #[arg(long)]
    age: Option<String>,
}

impl MeasurementArgs {
    fn apply(self, draft: &mut MeasurementDraft) {
        for (slot, value) in [
            (&mut draft.pregnancies, self.pregnancies),
            (&mut draft.glucose, self.glucose),
            (&mut draft.blood_pressure, self.blood_pressure),
            (&mut draft.insulin, self.insulin),
            (&mut draft.bmi, self.bmi),
            (&mut draft.age, self.age),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(flag) = self.family_history {
            draft.diabetic_family = flag;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url)?;

    match cli.command {
        Command::Login(args) => run_login(&client, args).await,
        Command::Signup(args) => run_signup(&client, args).await,
        Command::VerifyEmail { token } => {
            let resp = client.verify_email(&token).await?;
            println!("{}", resp.message);
            Ok(())
        }
        Command::ResendVerification { email } => {
            let resp = client.resend_verification(&email).await?;
            println!("{}", resp.message.unwrap_or_else(|| format!("Verification email sent to {email}")));
            Ok(())
        }
        Command::Records(records) => {
            let token = cli.token.as_deref().ok_or(CliError::MissingToken)?;
            run_records(&client, token, records.command).await
        }
        Command::Models => {
            print!("{}", output::models_table());
            Ok(())
        }
    }
}

async fn run_login(client: &ApiClient, args: LoginArgs) -> Result<(), CliError> {
    if args.email.trim().is_empty() || args.password.is_empty() {
        return Err(CliError::Invalid("Please enter both email and password".to_owned()));
    }
    let session = Session::from(client.login(&args.email, &args.password).await?);
    eprintln!("signed in as {}", session.display_name());
    print_json(&session)
}

async fn run_signup(client: &ApiClient, args: SignupArgs) -> Result<(), CliError> {
    let draft = SignupDraft {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        date_of_birth: args.date_of_birth,
        phone_number: args.phone_number,
        username: args.username,
        confirm_password: args.password.clone(),
        password: args.password,
        accept_terms: args.accept_terms,
    };
    draft.validate().map_err(|e| CliError::Invalid(e.to_string()))?;

    let resp = client
        .signup(&SignupRequest {
            email: draft.email.trim().to_owned(),
            password: draft.password,
            first_name: draft.first_name.trim().to_owned(),
            last_name: draft.last_name.trim().to_owned(),
            username: draft.username.trim().to_owned(),
            phone_number: draft.phone_number.trim().to_owned(),
            date_of_birth: draft.date_of_birth,
        })
        .await?;
    println!(
        "{}",
        resp.message
            .unwrap_or_else(|| format!("Account created; check {} for a verification link", resp.email))
    );
    Ok(())
}

async fn run_records(client: &ApiClient, token: &str, command: RecordsSubcommand) -> Result<(), CliError> {
    match command {
        RecordsSubcommand::List { model, json } => {
            let records = client.fetch_records(token).await?;
            if json {
                print_json(&records)
            } else {
                print!("{}", output::records_table(&records, model));
                Ok(())
            }
        }
        RecordsSubcommand::Show { id } => {
            let record = find_record(client, token, &id).await?;
            print_json(&record)
        }
        RecordsSubcommand::Add(args) => {
            let mut draft = MeasurementDraft::default();
            args.apply(&mut draft);
            let measurements = draft.validate().map_err(|e| CliError::Invalid(validation::summarize(&e)))?;
            print_json(&client.create_record(token, &measurements).await?)
        }
        RecordsSubcommand::Update { id, measurements: args } => {
            let record = find_record(client, token, &id).await?;
            let mut draft = MeasurementDraft::from_measurements(&record.measurements);
            args.apply(&mut draft);
            let measurements = draft.validate().map_err(|e| CliError::Invalid(validation::summarize(&e)))?;
            print_json(&client.update_record(token, &record.id, &measurements).await?)
        }
        RecordsSubcommand::Delete { id } => {
            let resp = client.delete_record(token, &id).await?;
            println!("{}", resp.message.unwrap_or_else(|| format!("Record {id} deleted")));
            Ok(())
        }
        RecordsSubcommand::Import { file } => {
            let len = tokio::fs::metadata(&file).await?.len();
            if usize::try_from(len).map_or(true, |len| len > csv::MAX_CSV_BYTES) {
                return Err(CsvError::TooLarge.into());
            }
            let text = tokio::fs::read_to_string(&file).await?;
            let rows = csv::parse_measurements(&text)?;
            eprintln!("uploading {} records from {}", rows.len(), file.display());
            print_json(&client.create_records_bulk(token, rows).await?)
        }
    }
}

async fn find_record(client: &ApiClient, token: &str, id: &str) -> Result<Assessment, CliError> {
    client
        .fetch_records(token)
        .await?
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| CliError::RecordNotFound(id.to_owned()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
