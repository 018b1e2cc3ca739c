use std::sync::Mutex;
use std::thread;

use log::{debug, warn};

use crate::image_view::RowsBandMut;

/// Defines how bands of rows are distributed between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Threading {
    /// All bands are processed one by one in the calling thread.
    None,
    /// Every band is processed in a separate scoped thread.
    /// If a thread can't be spawned, its band is processed
    /// in the calling thread.
    #[default]
    Scoped,
    /// Bands are processed by the current `rayon` thread pool.
    #[cfg(feature = "rayon")]
    Rayon,
}

/// Applies `process_band` to every band and returns after all bands
/// have been processed.
pub(crate) fn process_bands<F>(threading: Threading, bands: Vec<RowsBandMut<'_>>, process_band: F)
where
    F: Fn(&mut RowsBandMut) + Sync,
{
    // Empty bands appear if there are more workers than rows.
    let mut bands: Vec<RowsBandMut> = bands
        .into_iter()
        .filter(|band| !band.range.is_empty())
        .collect();
    if bands.len() < 2 {
        bands.iter_mut().for_each(process_band);
        return;
    }
    match threading {
        Threading::None => {
            debug!("Process {} bands in the calling thread", bands.len());
            bands.iter_mut().for_each(process_band);
        }
        Threading::Scoped => {
            debug!("Process {} bands in scoped threads", bands.len());
            process_in_scoped_threads(bands, &process_band, thread::Builder::new);
        }
        #[cfg(feature = "rayon")]
        Threading::Rayon => {
            debug!("Process {} bands in rayon thread pool", bands.len());
            process_in_rayon_pool(bands, &process_band);
        }
    }
}

fn process_in_scoped_threads<F, B>(bands: Vec<RowsBandMut<'_>>, process_band: &F, new_builder: B)
where
    F: Fn(&mut RowsBandMut) + Sync,
    B: Fn() -> thread::Builder,
{
    // A band is moved into a thread only after the thread has started,
    // so the band is still available if spawning fails.
    let slots: Vec<Mutex<Option<RowsBandMut>>> =
        bands.into_iter().map(|band| Mutex::new(Some(band))).collect();

    thread::scope(|scope| {
        for (i, slot) in slots.iter().enumerate() {
            let spawn_result = new_builder()
                .name(format!("convolve-{i}"))
                .spawn_scoped(scope, move || process_slot(slot, process_band));
            if let Err(err) = spawn_result {
                warn!(
                    "Failed to spawn thread for band {i}, process it in the calling thread: {err}"
                );
                process_slot(slot, process_band);
            }
        }
    });
}

fn process_slot<F>(slot: &Mutex<Option<RowsBandMut>>, process_band: &F)
where
    F: Fn(&mut RowsBandMut) + Sync,
{
    let band = match slot.lock() {
        Ok(mut guard) => guard.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    if let Some(mut band) = band {
        process_band(&mut band);
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::prelude::*;

        fn process_in_rayon_pool<F>(bands: Vec<RowsBandMut<'_>>, process_band: &F)
        where
            F: Fn(&mut RowsBandMut) + Sync,
        {
            bands
                .into_par_iter()
                .for_each(|mut band| process_band(&mut band));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::{split_rows, RowRange};

    fn make_bands<'a>(buffer: &'a mut [u8], ranges: &[RowRange]) -> Vec<RowsBandMut<'a>> {
        let mut rest = buffer;
        let mut bands = Vec::new();
        for &range in ranges {
            let (band, tail) = std::mem::take(&mut rest).split_at_mut(range.len() as usize);
            rest = tail;
            bands.push(RowsBandMut {
                range,
                row_size: 1,
                buffer: band,
            });
        }
        bands
    }

    fn fill_row_indexes(band: &mut RowsBandMut) {
        for (y, row) in band.iter_rows_mut() {
            row.fill(y as u8 + 1);
        }
    }

    fn expected(height: u32) -> Vec<u8> {
        (1..=height as u8).collect()
    }

    #[test]
    fn all_rows_are_processed() {
        let mut variants = vec![Threading::None, Threading::Scoped];
        #[cfg(feature = "rayon")]
        variants.push(Threading::Rayon);

        for threading in variants {
            for parts in [1, 2, 3, 4, 8, 20] {
                let mut buffer = vec![0u8; 13];
                let bands = make_bands(&mut buffer, &split_rows(13, parts));
                process_bands(threading, bands, fill_row_indexes);
                assert_eq!(buffer, expected(13), "{threading:?}, {parts} parts");
            }
        }
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn rows_are_processed_if_threads_can_not_be_spawned() {
        let mut buffer = vec![0u8; 10];
        let bands = make_bands(&mut buffer, &split_rows(10, 4));
        // Stack of this size can't be mapped into the address space.
        let new_builder = || thread::Builder::new().stack_size(usize::MAX / 2);
        process_in_scoped_threads(bands, &fill_row_indexes, new_builder);
        assert_eq!(buffer, expected(10));
    }
}
