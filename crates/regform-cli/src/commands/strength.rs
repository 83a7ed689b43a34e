use crate::report;

pub fn execute(password: &str) {
    report::print_password_strength(password);
}
