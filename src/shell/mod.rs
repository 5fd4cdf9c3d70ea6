//! Line-based menu shell over a [`Store`].
//!
//! Reads whitespace-separated tokens, maps the menu number to a [`Command`],
//! runs it and prints the reply. Store errors are printed and the menu comes
//! back; only I/O failures end the session early.

mod command;
mod input;
mod render;

use command::{Command, MenuChoice, Reply};

use crate::config::{PermissionPolicy, Settings};
use cellshare_core::{AccessLevel, Store};
use input::TokenReader;
use std::io::{self, BufRead, Write};

pub struct Shell<R, W> {
    store: Store,
    settings: Settings,
    input: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: Store, settings: Settings, input: R, out: W) -> Self {
        Shell {
            store,
            settings,
            input: TokenReader::new(input),
            out,
        }
    }

    /// Run until `exit` is entered at the menu or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(token) = self.input.next_token()? else {
                break;
            };
            if token == "exit" {
                break;
            }
            if let Some(choice) = MenuChoice::from_token(&token)
                && !self.run_choice(choice)?
            {
                break;
            }
            self.input.discard_line();
        }
        self.out.flush()
    }

    /// Read the arguments for `choice` and run it. Returns false at end of input.
    fn run_choice(&mut self, choice: MenuChoice) -> io::Result<bool> {
        let command = match choice {
            MenuChoice::CreateUser => {
                let Some([name]) = self.read_args()? else {
                    return Ok(false);
                };
                Command::CreateUser { name }
            }
            MenuChoice::CreateSheet => {
                let Some([owner, sheet]) = self.read_args()? else {
                    return Ok(false);
                };
                Command::CreateSheet { owner, sheet }
            }
            MenuChoice::CheckSheet => {
                let Some([user, sheet]) = self.read_args()? else {
                    return Ok(false);
                };
                Command::CheckSheet { user, sheet }
            }
            MenuChoice::UpdateCell => {
                let Some([user, sheet]) = self.read_args()? else {
                    return Ok(false);
                };
                self.respond(&Command::CheckSheet {
                    user: user.clone(),
                    sheet: sheet.clone(),
                })?;
                let Some([x, y, expr]) = self.read_args()? else {
                    return Ok(false);
                };
                let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) else {
                    self.invalid_input()?;
                    return Ok(true);
                };
                Command::UpdateCell {
                    user,
                    sheet,
                    x,
                    y,
                    expr,
                }
            }
            MenuChoice::ChangePermission => match self.settings.permission_policy {
                PermissionPolicy::Permissive => {
                    let Some([user, sheet, level]) = self.read_args()? else {
                        return Ok(false);
                    };
                    let Ok(level) = level.parse::<AccessLevel>() else {
                        self.invalid_input()?;
                        return Ok(true);
                    };
                    Command::SetPermission { user, sheet, level }
                }
                PermissionPolicy::Strict => {
                    let Some([actor, user, sheet, level]) = self.read_args()? else {
                        return Ok(false);
                    };
                    let Ok(level) = level.parse::<AccessLevel>() else {
                        self.invalid_input()?;
                        return Ok(true);
                    };
                    Command::GrantPermission {
                        actor,
                        user,
                        sheet,
                        level,
                    }
                }
            },
            MenuChoice::Collaborate => {
                let Some([user, sheet, collaborator]) = self.read_args()? else {
                    return Ok(false);
                };
                Command::Collaborate {
                    user,
                    sheet,
                    collaborator,
                }
            }
            MenuChoice::ListSheets => {
                let Some([user]) = self.read_args()? else {
                    return Ok(false);
                };
                Command::ListSheets { user }
            }
        };
        self.respond(&command)?;
        Ok(true)
    }

    /// Execute a command and print its reply or error.
    fn respond(&mut self, command: &Command) -> io::Result<()> {
        tracing::debug!(?command, "executing command");
        let text = match command.execute(&self.store, self.settings.operator_rule) {
            Ok(Reply::Message(message)) => format!("{}\n\n", message),
            Ok(Reply::Grid(grid)) => render::render_grid(&grid, self.settings.precision),
            Ok(Reply::Sheets(sheets)) => render::render_sheets(&sheets),
            Err(err) => format!("{}\n\n", err),
        };
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Prompt once, then read exactly `N` tokens. None if the input ends first.
    fn read_args<const N: usize>(&mut self) -> io::Result<Option<[String; N]>> {
        self.prompt()?;
        let mut args = Vec::with_capacity(N);
        for _ in 0..N {
            match self.input.next_token()? {
                Some(token) => args.push(token),
                None => return Ok(None),
            }
        }
        Ok(args.try_into().ok())
    }

    fn invalid_input(&mut self) -> io::Result<()> {
        writeln!(self.out, "Invalid input!\n")?;
        self.out.flush()
    }

    fn prompt(&mut self) -> io::Result<()> {
        if self.settings.quiet {
            return Ok(());
        }
        write!(self.out, "{}", self.settings.prompt)?;
        self.out.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        if self.settings.quiet {
            return Ok(());
        }
        write!(self.out, "{}", render::MENU)?;
        self.prompt()
    }
}
