use time_decoder::list_formats;

pub fn run() {
    for format in list_formats() {
        println!("{:<16} {}", format.id(), format.display_name());
    }
}
