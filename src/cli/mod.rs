//! Terminal presenter.
//!
//! Routes between the landing view and the registration form, turns input lines
//! into form events and prints the resulting snapshot.

mod command;
mod render;

pub use command::*;
pub use render::*;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::form::FormOptions;
use crate::submission::{HttpRegistrationClient, RegistrationClient, RegistrationForm};

/// The page currently shown.
#[derive(Debug)]
pub enum View<C> {
    Landing,
    Register(RegistrationForm<C>),
}

/// What the input loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Redraw the current view
    Render,
    /// Print a one-line notice and keep the view as is
    Notice(String),
    Quit,
}

/// Two-view application state. Every form gets its own copy of the client.
pub struct App<C> {
    client: C,
    options: FormOptions,
    view: View<C>,
}

impl<C: RegistrationClient + Clone> App<C> {
    pub fn new(client: C, options: FormOptions) -> Self {
        Self {
            client,
            options,
            view: View::Landing,
        }
    }

    pub fn view(&self) -> &View<C> {
        &self.view
    }

    pub fn render(&self) -> String {
        match &self.view {
            View::Landing => render_landing(),
            View::Register(form) => render_form(&form.snapshot()),
        }
    }

    pub async fn handle(&mut self, command: Command) -> Step {
        match command {
            Command::Quit => return Step::Quit,
            Command::Help => return Step::Notice(HELP.to_string()),
            Command::Show => return Step::Render,
            _ => {}
        }

        let form = match &mut self.view {
            View::Landing => {
                return match command {
                    Command::Start => {
                        tracing::debug!("Opening registration form");
                        self.view = View::Register(RegistrationForm::new(
                            self.client.clone(),
                            self.options,
                        ));
                        Step::Render
                    }
                    _ => Step::Notice("press Enter to open the registration form".to_string()),
                };
            }
            View::Register(form) => form,
        };

        let result = match command {
            Command::Start => Ok(()),
            Command::Set(field, value) => form.edit_field(field, &value),
            Command::Check(flag, value) => form.toggle_flag(flag, value),
            Command::Agree(value) => form.set_consent(value),
            Command::Submit => form
                .submit_with(|snapshot| println!("\n{}", render_form(snapshot)))
                .await
                .map(|_| ()),
            Command::Retry => form.retry(),
            Command::Close => match form.close() {
                Ok(()) => {
                    tracing::debug!("Registration form closed");
                    self.view = View::Landing;
                    Ok(())
                }
                Err(rejected) => Err(rejected),
            },
            Command::Show | Command::Help | Command::Quit => Ok(()),
        };

        match result {
            Ok(()) => Step::Render,
            Err(rejected) => Step::Notice(rejected.message()),
        }
    }
}

/// Read commands from stdin until `quit` or end of input.
pub async fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = HttpRegistrationClient::from_config(config)?;
    tracing::info!("Registration endpoint: {}", client.endpoint());

    let mut app = App::new(client, config.form_options());
    println!("{}", app.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let step = match parse_command(&line) {
            Ok(command) => app.handle(command).await,
            Err(err) => Step::Notice(err.to_string()),
        };

        match step {
            Step::Render => println!("\n{}", app.render()),
            Step::Notice(message) => println!("{}", message),
            Step::Quit => break,
        }
    }

    Ok(())
}
