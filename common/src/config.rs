#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Allows an owner to take a pet that already belongs to someone else.
    ///
    /// When disabled, adding an owned pet to a different owner is rejected
    /// and both owners are left untouched.
    pub allow_reassign: bool,
    /// Output reduction level for the terminal front end.
    ///
    /// `0` prints everything, `1` drops headers and the banner, `2` only
    /// prints summaries.
    pub quiet: u8,
    /// Suppresses the startup banner.
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_reassign: true,
            quiet: 0,
            no_banner: false,
        }
    }
}
