use std::process;

fn main() {
  if let Err(err) = devops_cli::logger::init() {
    eprintln!("devops-cli: could not initialise logging: {}", err);
  }

  let args = std::env::args_os().skip(1).collect();
  let status = devops_cli::run(args);

  log::logger().flush();
  process::exit(status);
}
