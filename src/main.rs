use std::io::{self, BufRead, Write};

use punchlist::client::{ApiClient, BackendMode, SyncController, render_lines};
use punchlist::config::Config;
use punchlist::store::LocalStore;

const HELP: &str = "\
commands:
  add <name> [-- <description>]   create a task
  rm <id>                         delete a task by id
  show <index>                    expand/collapse a task's description
  ls                              redraw the list
  quit                            exit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::load();
    config.ensure_dirs()?;

    let remote = ApiClient::new(&config.api_base_url)?;
    let local = LocalStore::new(&config.local_dir);
    let mut controller = SyncController::new(remote, local);

    controller.load().await;
    let mut was_remote = controller.mode() == BackendMode::Remote;
    if !was_remote {
        println!("backend unreachable, working offline");
    }
    draw(&controller);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let (command, rest) = match line.trim().split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => continue,
            "add" => {
                let (name, description) = match rest.split_once("--") {
                    Some((name, desc)) => (name, desc),
                    None => (rest, ""),
                };
                if !controller.add(name, description).await {
                    println!("nothing added: a task needs a non-empty name");
                }
            }
            "rm" => match rest.parse::<u64>() {
                Ok(id) => {
                    if !controller.delete(id).await {
                        println!("no task #{}", id);
                    }
                }
                Err(_) => println!("usage: rm <id>"),
            },
            "show" => match rest.parse::<usize>() {
                Ok(index) => controller.toggle(index),
                Err(_) => println!("usage: show <index>"),
            },
            "ls" => {}
            "quit" | "exit" | "q" => break,
            _ => {
                println!("{}", HELP);
                continue;
            }
        }

        if was_remote && controller.mode() == BackendMode::Local {
            was_remote = false;
            println!("backend unreachable, working offline from here on");
        }
        draw(&controller);
    }

    Ok(())
}

fn draw<R: punchlist::client::RemoteApi>(controller: &SyncController<R>) {
    let lines = render_lines(controller.tasks(), controller.expanded());
    if lines.is_empty() {
        println!("(no tasks)");
        return;
    }
    for line in lines {
        println!("{}", line);
    }
}
