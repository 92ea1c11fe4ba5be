//! Main entry point for the roster binary
//!
//! Loads the roster from the configured store, runs one command against a
//! payroll desk and writes the roster back when the command changed it.

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use roster::{
    services::{FixedClock, SystemClock},
    Clock, ConfigOverrides, EmployeeView, PayrollDesk, RecordStore, RosterConfig,
};
use shared::{
    component_debug, dates::parse_date, logging, ComponentId, Employee, Language, NewEmployee,
};

/// Employee roster with one-shot, time-gated payouts
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse an employee roster and apply one-shot payouts")]
pub struct Args {
    /// Roster file (overrides ROSTER_DATA_FILE)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Storage format: json or binary (overrides ROSTER_FORMAT)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Pin the reference date as DD-MM-YYYY instead of using the system date
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every record in roster order
    List,
    /// Show one record with its payout status
    Show { number: u32 },
    /// Hire an analyst
    AddAnalyst {
        #[command(flatten)]
        base: BaseArgs,
        /// Flat amount credited per full year of service
        #[arg(long)]
        bonus: f64,
        #[arg(long)]
        qualification: String,
    },
    /// Hire a programmer
    AddProgrammer {
        #[command(flatten)]
        base: BaseArgs,
        /// Percentage of salary credited per full month of service
        #[arg(long)]
        extra_percent: f64,
        /// One of C, C#, C++, Java, Python
        #[arg(long)]
        language: String,
    },
    /// Remove a record
    Remove { number: u32 },
    /// Apply the one-shot payout to a record
    Apply { number: u32 },
    /// Sort the roster by employee number
    Sort,
    /// Add the sample employees
    Demo,
    /// Browse the roster interactively
    Shell,
}

/// Fields shared by every new hire
#[derive(clap::Args)]
pub struct BaseArgs {
    #[arg(long)]
    pub number: u32,
    #[arg(long)]
    pub name: String,
    /// Hire date as DD-MM-YYYY
    #[arg(long)]
    pub hire_date: String,
    #[arg(long)]
    pub salary: f64,
    #[arg(long)]
    pub max_salary: f64,
}

impl BaseArgs {
    fn into_details(self) -> anyhow::Result<NewEmployee> {
        Ok(NewEmployee {
            employee_number: self.number,
            name: self.name,
            hire_date: parse_date(&self.hire_date)?,
            salary: self.salary,
            max_salary: self.max_salary,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Args {
        data_file,
        format,
        log_level,
        today,
        command,
    } = Args::parse();

    ComponentId::init_roster();

    let config = RosterConfig::from_env()?.apply(ConfigOverrides {
        data_file,
        format,
        log_level,
        today,
    })?;
    logging::init_tracing_with_level(Some(&config.log_level));
    logging::log_startup(
        ComponentId::current(),
        &format!("roster ({}, {})", config.data_file.display(), config.format),
    );

    let store = config.store();
    let result = match config.today {
        Some(date) => run(PayrollDesk::new(FixedClock(date), store), command).await,
        None => run(PayrollDesk::new(SystemClock::new(), store), command).await,
    };

    match &result {
        Ok(()) => logging::log_shutdown(ComponentId::current(), "command finished"),
        Err(e) => logging::log_error(ComponentId::current(), "Roster command", e),
    }
    result
}

async fn run<C, S>(mut desk: PayrollDesk<C, S>, command: Command) -> anyhow::Result<()>
where
    C: Clock,
    S: RecordStore,
{
    desk.load().await.context("loading roster")?;

    match command {
        Command::List => {
            if desk.is_empty() {
                println!("(empty roster)");
            }
            for employee in desk.employees() {
                println!("{employee}");
            }
        }
        Command::Show { number } => {
            desk.select(number)?;
            print_current(&desk);
        }
        Command::AddAnalyst {
            base,
            bonus,
            qualification,
        } => {
            let details = base.into_details()?;
            let employee = Employee::analyst(details, bonus, qualification, desk.today())?;
            desk.hire(employee)?;
            print_current(&desk);
            desk.save().await?;
        }
        Command::AddProgrammer {
            base,
            extra_percent,
            language,
        } => {
            let language = Language::from_str(&language)
                .ok_or_else(|| anyhow!("unknown language '{language}'"))?;
            let details = base.into_details()?;
            let employee = Employee::programmer(details, extra_percent, language, desk.today())?;
            desk.hire(employee)?;
            print_current(&desk);
            desk.save().await?;
        }
        Command::Remove { number } => {
            desk.select(number)?;
            let removed = desk.remove_current()?;
            println!("Removed {removed}");
            desk.save().await?;
        }
        Command::Apply { number } => {
            desk.select(number)?;
            let amount = desk.apply_current()?;
            println!("Credited {amount:.2}");
            print_current(&desk);
            desk.save().await?;
        }
        Command::Sort => {
            sort(&mut desk);
            desk.save().await?;
        }
        Command::Demo => {
            let mut added = 0;
            for employee in demo_employees(desk.today())? {
                if desk.list().exists(employee.employee_number()) {
                    component_debug!(
                        ComponentId::current(),
                        "Demo employee #{} already present",
                        employee.employee_number()
                    );
                    continue;
                }
                desk.enroll(employee)?;
                added += 1;
            }
            println!("Added {added} sample employees");
            desk.save().await?;
        }
        Command::Shell => shell(&mut desk).await?,
    }
    Ok(())
}

fn sort<C: Clock, S: RecordStore>(desk: &mut PayrollDesk<C, S>) {
    let report = desk.sort();
    if report.sorted {
        println!(
            "Sorted {} records: linked list {:?}, vec {:?}",
            report.count, report.list_elapsed, report.vec_elapsed
        );
    } else {
        println!("Nothing to sort");
    }
}

fn print_current<C: Clock, S: RecordStore>(desk: &PayrollDesk<C, S>) {
    match desk.view() {
        Some(view) => print_view(&view),
        None => println!("(no record selected)"),
    }
}

fn print_view(view: &EmployeeView) {
    let employee = &view.employee;
    println!("[{}/{}] {}", view.position, view.total, employee);
    println!("  name: {}", employee.visible_name());
    println!(
        "  payout today: {:.2} ({})",
        view.payout,
        if view.eligible { "eligible" } else { "not eligible" }
    );

    let controls = view.controls;
    let enabled: Vec<&str> = [
        ("first", controls.first),
        ("back", controls.back),
        ("next", controls.next),
        ("last", controls.last),
        ("apply", controls.calculate),
    ]
    .into_iter()
    .filter_map(|(name, on)| on.then_some(name))
    .collect();
    println!("  available: {}", enabled.join(" "));
}

const SHELL_HELP: &str = "commands: first | last | next | prev | show | goto <n> | apply | \
                          remove | sort | list | save | help | quit";

/// Line-oriented record browser over stdin
async fn shell<C: Clock, S: RecordStore>(desk: &mut PayrollDesk<C, S>) -> anyhow::Result<()> {
    println!("{SHELL_HELP}");
    desk.first();
    print_current(desk);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut dirty = false;
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            continue;
        };

        let outcome: anyhow::Result<()> = match word {
            "first" => {
                desk.first();
                Ok(())
            }
            "last" => {
                desk.last();
                Ok(())
            }
            "next" | "n" => {
                desk.next();
                Ok(())
            }
            "prev" | "p" => {
                desk.previous();
                Ok(())
            }
            "show" => Ok(()),
            "goto" => match words.next().map(str::parse::<u32>) {
                Some(Ok(number)) => desk.select(number).map(|_| ()).map_err(Into::into),
                _ => Err(anyhow!("usage: goto <number>")),
            },
            "apply" => match desk.apply_current() {
                Ok(amount) => {
                    println!("Credited {amount:.2}");
                    dirty = true;
                    Ok(())
                }
                Err(e) => Err(e.into()),
            },
            "remove" => match desk.remove_current() {
                Ok(removed) => {
                    println!("Removed {removed}");
                    dirty = true;
                    Ok(())
                }
                Err(e) => Err(e.into()),
            },
            "sort" => {
                sort(desk);
                dirty = true;
                Ok(())
            }
            "list" => {
                for employee in desk.employees() {
                    println!("{employee}");
                }
                continue;
            }
            "save" => match desk.save().await {
                Ok(count) => {
                    println!("Saved {count} records");
                    dirty = false;
                    Ok(())
                }
                Err(e) => Err(e.into()),
            },
            "help" => {
                println!("{SHELL_HELP}");
                continue;
            }
            "quit" | "exit" | "q" => break,
            other => Err(anyhow!("unknown command '{other}'")),
        };

        match outcome {
            Ok(()) => print_current(desk),
            Err(e) => println!("error: {e}"),
        }
    }

    if dirty {
        desk.save().await?;
    }
    Ok(())
}

/// Sample employees; hire dates that would lie in the future are refused by
/// validation like any other input.
fn demo_employees(today: chrono::NaiveDate) -> anyhow::Result<Vec<Employee>> {
    let details = |employee_number: u32, name: &str, hire_date: &str, pay: (f64, f64)| {
        Ok::<_, anyhow::Error>(NewEmployee {
            employee_number,
            name: name.to_string(),
            hire_date: parse_date(hire_date)?,
            salary: pay.0,
            max_salary: pay.1,
        })
    };

    let john = details(1, "John", "01-01-2021", (5000.0, 5100.0))?;
    let alice = details(2, "Alice", "15-02-2022", (4800.0, 5900.0))?;
    let bob = details(4, "Bob", "11-08-2023", (5500.0, 6100.0))?;
    let sasque = details(3, "Sasque", "14-08-2023", (5000.0, 100_000.0))?;

    Ok(vec![
        Employee::analyst(john, 200.0, "Certified Analyst", today)?,
        Employee::analyst(alice, 400.0, "Experienced Analyst", today)?,
        Employee::programmer(bob, 12.0, Language::Java, today)?,
        Employee::programmer(sasque, 100.0, Language::Python, today)?,
    ])
}
