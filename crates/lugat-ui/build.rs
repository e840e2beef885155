fn main() {
    slint_build::compile("ui/lookup.slint").expect("failed to compile Slint UI");
}
