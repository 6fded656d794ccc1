use phonebook::database::Database;
use phonebook::domain::ports::person_repository::PersonRepository;
use std::env;
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("usage: seed <database-url> [name number]");
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        return usage();
    }

    let db = match Database::connect(&args[1]) {
        Ok(db) => db,
        Err(err) => {
            eprintln!("error connecting to the database: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = db.run_migrations().await {
        eprintln!("error connecting to the database: {}", err);
        return ExitCode::FAILURE;
    }

    match args.len() {
        // List every stored contact
        2 => {
            let persons = match db.list_persons().await {
                Ok(persons) => persons,
                Err(err) => {
                    eprintln!("failed to list phonebook: {}", err);
                    return ExitCode::FAILURE;
                }
            };

            println!("phonebook:");
            for person in persons {
                println!("{} {}", person.name, person.number);
            }

            ExitCode::SUCCESS
        }
        // Insert exactly one contact
        4 => match db.create_person(&args[2], &args[3]).await {
            Ok(person) => {
                println!(
                    "added {} number {} to phonebook",
                    person.name, person.number
                );
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            }
        },
        _ => usage(),
    }
}
