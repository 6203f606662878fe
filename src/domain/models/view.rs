#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    Landing,
    Home,
    Results,
    Developer,
}
