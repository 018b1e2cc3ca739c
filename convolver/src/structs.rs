use fast_image_convolve as fc;

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Threading {
    /// One thread for each range of rows
    Scoped,
    /// Ranges of rows are processed by rayon's thread pool
    Rayon,
    /// All rows are processed in the main thread
    None,
}

impl From<Threading> for fc::Threading {
    fn from(threading: Threading) -> Self {
        match threading {
            Threading::Scoped => fc::Threading::Scoped,
            Threading::Rayon => fc::Threading::Rayon,
            Threading::None => fc::Threading::None,
        }
    }
}

/// Count of workers: a positive number or `auto` to use
/// one worker per available CPU.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Workers(pub fc::WorkerCount);

impl std::str::FromStr for Workers {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "auto" {
            return Ok(Self(fc::WorkerCount::Available));
        }
        match s.parse::<usize>() {
            Ok(0) => Err("count of workers must be greater than zero".to_owned()),
            Ok(count) => Ok(Self(fc::WorkerCount::fixed(count))),
            Err(_) => Err(format!("invalid count of workers: {s:?}")),
        }
    }
}
