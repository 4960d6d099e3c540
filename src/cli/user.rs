//! User account commands
//!
//! Passwords are prompted without echo unless `--password` is passed.

use clap::Subcommand;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{FinanceError, FinanceResult};
use crate::services::UserService;
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Create an account and sign in
    Register {
        /// Display name
        name: String,
        /// Email address
        email: String,
        /// Password (prompted when omitted)
        #[arg(long, env = "FINANZAS_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign in with an existing account
    Login {
        /// Email address
        email: String,
        /// Password (prompted when omitted)
        #[arg(long, env = "FINANZAS_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,
}

/// Password and confirmation, wiped on drop
#[derive(Zeroize, ZeroizeOnDrop)]
struct Credentials {
    password: String,
    confirm: String,
}

impl Credentials {
    fn for_register(given: Option<String>) -> FinanceResult<Self> {
        match given {
            // A password passed on the command line confirms itself
            Some(password) => Ok(Self {
                confirm: password.clone(),
                password,
            }),
            None => Ok(Self {
                password: prompt_password("Password: ")?,
                confirm: prompt_password("Confirm password: ")?,
            }),
        }
    }

    fn for_login(given: Option<String>) -> FinanceResult<Self> {
        let password = match given {
            Some(password) => password,
            None => prompt_password("Password: ")?,
        };
        Ok(Self {
            password,
            confirm: String::new(),
        })
    }
}

fn prompt_password(prompt: &str) -> FinanceResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| FinanceError::Io(format!("Failed to read password: {}", e)))
}

/// Handle a user command
pub fn handle_user_command(storage: &Storage, cmd: UserCommands) -> FinanceResult<()> {
    let service = UserService::new(storage);

    match cmd {
        UserCommands::Register {
            name,
            email,
            password,
        } => {
            let credentials = Credentials::for_register(password)?;
            let profile =
                service.register(&name, &email, &credentials.password, &credentials.confirm)?;
            println!("Welcome, {}! Signed in as {}", profile.name, profile.email);
        }

        UserCommands::Login { email, password } => {
            let credentials = Credentials::for_login(password)?;
            let profile = service.authenticate(&email, &credentials.password)?;
            println!("Signed in as {} <{}>", profile.name, profile.email);
        }

        UserCommands::Logout => {
            service.logout()?;
            println!("Signed out.");
        }

        UserCommands::Whoami => match service.current()? {
            Some(profile) => {
                println!("{} <{}>", profile.name, profile.email);
                println!("  ID: {}", profile.id);
            }
            None => println!("Not signed in."),
        },
    }

    Ok(())
}
