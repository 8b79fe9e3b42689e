fn main() -> std::io::Result<()> {
    health_buddy_lib::run()
}
