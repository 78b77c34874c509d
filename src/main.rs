use murmur::SwarmDemo;

fn main() {
    env_logger::init();

    if let Err(e) = SwarmDemo::new().run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
