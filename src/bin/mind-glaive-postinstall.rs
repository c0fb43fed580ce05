use mind_glaive::core::banner::postinstall_banner;

fn main() {
    print!("{}", postinstall_banner());
}
