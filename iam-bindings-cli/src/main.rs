use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use iam_bindings::{decode_exception, Credentials, IamBindingsError, IamBindingsService, Mapping, Params};
use serde_json::Value;
use std::process::ExitCode;

/// Exit code for failed operations (service errors included).
const EXIT_FAILURE: u8 = 1;
/// Exit code for unusable parameters.
const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "iam-bindings",
    version,
    about = "Run IAM role, role policy and instance profile operations and print the results as JSON"
)]
struct Cli {
    /// Access key; leave unset to use the ambient AWS credential chain
    #[arg(long, env = "IAM_BINDINGS_ACCESS_KEY", global = true)]
    access_key: Option<String>,

    /// Secret key matching --access-key
    #[arg(long, env = "IAM_BINDINGS_SECRET_KEY", global = true, hide_env_values = true)]
    secret_key: Option<String>,

    /// Override the IAM endpoint URL
    #[arg(long, env = "IAM_BINDINGS_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List roles
    ListRoles {
        /// JSON object with path-prefix, marker, max-items
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Show one role
    GetRole { role_name: String },
    /// Create a role; path and trust policy default when omitted
    CreateRole {
        /// JSON object, e.g. {"role-name": "app"}
        params: String,
    },
    /// Update a role's description or maximum session duration
    UpdateRole { params: String },
    /// Replace a role's trust policy
    UpdateAssumeRolePolicy { params: String },
    DeleteRole { role_name: String },
    /// List the inline policy names of a role
    ListRolePolicies { role_name: String },
    GetRolePolicy { role_name: String, policy_name: String },
    /// Fetch every inline policy of a role
    GetRolePolicies { role_name: String },
    /// Put an inline policy; JSON object with role-name, policy-name, policy-document
    PutRolePolicy { params: String },
    DeleteRolePolicy { role_name: String, policy_name: String },
    /// List instance profiles
    ListInstanceProfiles {
        /// JSON object with path-prefix, marker, max-items
        #[arg(long, default_value = "{}")]
        params: String,
    },
    ListInstanceProfilesForRole { role_name: String },
    GetInstanceProfile { profile_name: String },
    /// Create an instance profile; JSON object with instance-profile-name and optional path
    CreateInstanceProfile { params: String },
    DeleteInstanceProfile { profile_name: String },
    AddRoleToInstanceProfile { profile_name: String, role_name: String },
    RemoveRoleFromInstanceProfile { profile_name: String, role_name: String },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::ListRoles { .. } => "list-roles",
            Self::GetRole { .. } => "get-role",
            Self::CreateRole { .. } => "create-role",
            Self::UpdateRole { .. } => "update-role",
            Self::UpdateAssumeRolePolicy { .. } => "update-assume-role-policy",
            Self::DeleteRole { .. } => "delete-role",
            Self::ListRolePolicies { .. } => "list-role-policies",
            Self::GetRolePolicy { .. } => "get-role-policy",
            Self::GetRolePolicies { .. } => "get-role-policies",
            Self::PutRolePolicy { .. } => "put-role-policy",
            Self::DeleteRolePolicy { .. } => "delete-role-policy",
            Self::ListInstanceProfiles { .. } => "list-instance-profiles",
            Self::ListInstanceProfilesForRole { .. } => "list-instance-profiles-for-role",
            Self::GetInstanceProfile { .. } => "get-instance-profile",
            Self::CreateInstanceProfile { .. } => "create-instance-profile",
            Self::DeleteInstanceProfile { .. } => "delete-instance-profile",
            Self::AddRoleToInstanceProfile { .. } => "add-role-to-instance-profile",
            Self::RemoveRoleFromInstanceProfile { .. } => "remove-role-from-instance-profile",
        }
    }

    /// Raw JSON parameters, for the commands that take a parameter map.
    fn raw_params(&self) -> Option<&str> {
        match self {
            Self::ListRoles { params }
            | Self::CreateRole { params }
            | Self::UpdateRole { params }
            | Self::UpdateAssumeRolePolicy { params }
            | Self::PutRolePolicy { params }
            | Self::ListInstanceProfiles { params }
            | Self::CreateInstanceProfile { params } => Some(params),
            _ => None,
        }
    }
}

fn parse_params(raw: &str) -> Result<Params> {
    let value: Value = serde_json::from_str(raw).context("parameters are not valid JSON")?;
    match value {
        Value::Object(params) => Ok(params),
        other => bail!("parameters must be a JSON object, got {other}"),
    }
}

fn list(mappings: Vec<Mapping>) -> Option<Value> {
    Some(Value::Array(mappings.into_iter().map(Value::Object).collect()))
}

fn single(mapping: Option<Mapping>) -> Option<Value> {
    Some(mapping.map_or(Value::Null, Value::Object))
}

async fn execute(
    service: &IamBindingsService,
    command: Command,
    params: &Params,
) -> Result<Option<Value>, IamBindingsError> {
    let output = match command {
        Command::ListRoles { .. } => list(service.list_roles(params).await?),
        Command::GetRole { role_name } => single(service.get_role(&role_name).await?),
        Command::CreateRole { .. } => single(service.create_role(params).await?),
        Command::UpdateRole { .. } => {
            service.update_role(params).await?;
            None
        }
        Command::UpdateAssumeRolePolicy { .. } => {
            service.update_assume_role_policy(params).await?;
            None
        }
        Command::DeleteRole { role_name } => {
            service.delete_role(&role_name).await?;
            None
        }
        Command::ListRolePolicies { role_name } => Some(Value::from(
            service.list_role_policies(&role_name).await?,
        )),
        Command::GetRolePolicy {
            role_name,
            policy_name,
        } => Some(Value::Object(
            service.get_role_policy(&role_name, &policy_name).await?,
        )),
        Command::GetRolePolicies { role_name } => {
            list(service.get_role_policies(&role_name).await?)
        }
        Command::PutRolePolicy { .. } => {
            service.put_role_policy(params).await?;
            None
        }
        Command::DeleteRolePolicy {
            role_name,
            policy_name,
        } => {
            service.delete_role_policy(&role_name, &policy_name).await?;
            None
        }
        Command::ListInstanceProfiles { .. } => {
            list(service.list_instance_profiles(params).await?)
        }
        Command::ListInstanceProfilesForRole { role_name } => {
            list(service.list_instance_profiles_for_role(&role_name).await?)
        }
        Command::GetInstanceProfile { profile_name } => {
            single(service.get_instance_profile(&profile_name).await?)
        }
        Command::CreateInstanceProfile { .. } => {
            single(service.create_instance_profile(params).await?)
        }
        Command::DeleteInstanceProfile { profile_name } => {
            service.delete_instance_profile(&profile_name).await?;
            None
        }
        Command::AddRoleToInstanceProfile {
            profile_name,
            role_name,
        } => {
            service
                .add_role_to_instance_profile(&profile_name, &role_name)
                .await?;
            None
        }
        Command::RemoveRoleFromInstanceProfile {
            profile_name,
            role_name,
        } => {
            service
                .remove_role_from_instance_profile(&profile_name, &role_name)
                .await?;
            None
        }
    };
    Ok(output)
}

async fn run(credentials: &Credentials, command: Command, params: &Params) -> Result<Option<Value>> {
    let service = IamBindingsService::connect(credentials)
        .await
        .context("Failed to initialize IAM client")?;
    let name = command.name();
    log::debug!("Running {name}");
    execute(&service, command, params)
        .await
        .with_context(|| format!("{name} failed"))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn print_json(value: &Value) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to render result: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let params = match cli.command.raw_params().map(parse_params).transpose() {
        Ok(params) => params.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let credentials = Credentials {
        access_key: cli.access_key,
        secret_key: cli.secret_key,
        endpoint: cli.endpoint,
    };

    match run(&credentials, cli.command, &params).await {
        Ok(Some(value)) => print_json(&value),
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<IamBindingsError>().and_then(IamBindingsError::service_error) {
                Some(service_error) => {
                    let decoded = Value::Object(decode_exception(service_error));
                    eprintln!("{decoded:#}");
                }
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
