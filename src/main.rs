use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use userdeck::api::{self, HttpUsersApi};
use userdeck::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use userdeck::handlers::build_app;
use userdeck::models::{AppState, NewUser, Role, UserRecord};
use userdeck::services::{UsersController, UsersState};

fn build_controller(env_file: Option<&str>) -> (UsersController<HttpUsersApi>, String) {
    config::load_env_file(env_file);
    let api_base_url = config::get_api_base_url();
    let api = match HttpUsersApi::new(api_base_url.clone()) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };
    (UsersController::new(api, config::get_default_page_size()), api_base_url)
}

async fn start_server(controller: UsersController<HttpUsersApi>, api_base_url: String, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };

    // Mount: a failed first load just leaves the list empty
    let _ = controller.mount().await;

    let app = build_app(AppState::new(controller, api_base_url));
    tracing::info!(%addr, "Starting userdeck server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_users_table(users: &[UserRecord]) {
    if users.is_empty() {
        println!("(empty list)");
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Email", "Role"]);
    for u in users {
        table.add_row(vec![u.id.as_str(), u.name.as_str(), u.email.as_str(), u.role.as_str()]);
    }
    println!("\n{table}");
}

fn print_page(state: &UsersState) {
    print_users_table(&state.users);
    let p = &state.pagination;
    println!(
        "\n{}",
        yansi::Paint::new(format!(
            "Page {} of {} | {} per page | showing {} users",
            p.page,
            p.last_page(),
            p.limit,
            state.users.len()
        ))
        .cyan()
    );
    if let Some(prev) = p.prev_page() {
        println!(
            "{} {}",
            yansi::Paint::new("←").bold(),
            yansi::Paint::new(format!("Previous page: userdeck users list --page {} --limit {}", prev, p.limit)).dim()
        );
    }
    if let Some(next) = p.next_page() {
        println!(
            "{} {}",
            yansi::Paint::new("→").bold(),
            yansi::Paint::new(format!("Next page: userdeck users list --page {} --limit {}", next, p.limit)).dim()
        );
    }
    println!();
}

fn fail(msg: &str, e: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", yansi::Paint::new(msg).red(), e);
    process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "userdeck",
    author,
    version,
    about = "Browse and edit the users of a remote /api/users collection",
    long_about = r#"userdeck lists users page by page and creates, edits or deletes them through a remote JSON API.

Run `userdeck serve` for the web page, or use the `users` subcommands from a terminal. Configure the API with `API_BASE_URL` (default http://localhost:5001), either in the environment or in a `.env` file.

Examples:
  userdeck serve --port 8080
  userdeck users list --page 2 --limit 10
  userdeck users create "Ada Lovelace" ada@example.com --role admin
"#,
    after_help = "Use `userdeck <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Validate configuration and API connectivity
    #[command(long_about = "Check that API_BASE_URL is set and that the first page of users can be loaded from it.")]
    CheckConfig,
    /// Manage users through the configured API
    Users {
        #[command(subcommand)]
        sub: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    #[command(about = "List one page of users")]
    List {
        /// Page number (1-indexed)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,
        /// Users per page: 5, 10, 20 or 50
        #[arg(long, short = 'l')]
        limit: Option<u32>,
    },
    #[command(about = "Create a user", long_about = "Create a user and print the record the server returned.")]
    Create {
        name: String,
        email: String,
        #[arg(long, value_enum, default_value_t = Role::User)]
        role: Role,
    },
    #[command(about = "Replace a user's name, email and role", long_about = "Send the full record with PATCH; every field is required.")]
    Update {
        id: String,
        name: String,
        email: String,
        #[arg(long, value_enum)]
        role: Role,
    },
    #[command(about = "Delete a user")]
    Delete { id: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    if cli.silent {
        api::set_silent(true);
    }

    let (controller, api_base_url) = build_controller(cli.env_file.as_deref());

    // No command: serve the web page
    let command = cli.command.unwrap_or(Commands::Serve {
        host: DEFAULT_HOST.to_string(),
        port: DEFAULT_PORT,
    });

    match command {
        Commands::Serve { host, port } => {
            start_server(controller, api_base_url, &host, port).await;
        }
        Commands::CheckConfig => {
            if std::env::var("API_BASE_URL").map(|v| v.trim().is_empty()).unwrap_or(true) {
                println!(
                    "{} {}",
                    yansi::Paint::new("API_BASE_URL is not set; using").yellow(),
                    api_base_url
                );
            }
            match controller.mount().await {
                Ok(()) => {
                    let state = controller.snapshot();
                    println!(
                        "{}",
                        yansi::Paint::new(format!(
                            "Configuration looks valid ({} users on page 1, {} pages)",
                            state.users.len(),
                            state.pagination.last_page()
                        ))
                        .green()
                    );
                }
                Err(e) => fail("Configuration appears invalid", e),
            }
        }
        Commands::Users { sub } => match sub {
            UserCommands::List { page, limit } => {
                let limit = limit.unwrap_or_else(config::get_default_page_size);
                if let Err(e) = controller.load_page_at(page, limit).await {
                    fail("Failed to load users", e);
                }
                print_page(&controller.snapshot());
            }
            UserCommands::Create { name, email, role } => {
                if let Err(e) = controller.create(NewUser::new(name, email, role)).await {
                    fail("Failed to create user", e);
                }
                let state = controller.snapshot();
                print_users_table(&state.users);
                println!("{}", yansi::Paint::new("User created").green());
            }
            UserCommands::Update { id, name, email, role } => {
                let edited = UserRecord { id: id.clone(), name, email, role };
                if let Err(e) = controller.update(edited).await {
                    fail("Failed to update user", e);
                }
                println!("{} '{}' {}", yansi::Paint::new("User").green(), id, yansi::Paint::new("updated").green());
            }
            UserCommands::Delete { id } => {
                if let Err(e) = controller.delete(&id).await {
                    fail("Failed to delete user", e);
                }
                println!("{} '{}' {}", yansi::Paint::new("User").green(), id, yansi::Paint::new("deleted").green());
            }
        },
    }
}
