use sitedesk_model::{Plot, PlotStatus};

/// Plot sizes in sq.ft. with how many plots of each size, in layout order
pub const PLOT_MATRIX: [(u32, usize); 13] = [
    (920, 4),
    (1035, 20),
    (1100, 12),
    (1200, 1),
    (1350, 5),
    (2000, 6),
    (2100, 14),
    (1600, 2),
    (2450, 4),
    (1800, 2),
    (1500, 2),
    (3200, 6),
    (4500, 3),
];

const SOLD: usize = 38;
const BOOKED: usize = 24;
const BOOKED_BUYER: u32 = 5;
const SOLD_BUYER: u32 = 6;
const BROKERS: [u32; 4] = [1, 2, 3, 4];

/// The 81 plots of the layout
///
/// The first 38 are sold, the next 24 booked, the rest available.
#[must_use]
pub fn plots() -> Vec<Plot> {
    PLOT_MATRIX
        .iter()
        .flat_map(|&(size, count)| std::iter::repeat(size).take(count))
        .enumerate()
        .map(|(i, size)| {
            let status = if i < SOLD {
                PlotStatus::Sold
            } else if i < SOLD + BOOKED {
                PlotStatus::Booked
            } else {
                PlotStatus::Available
            };
            let buyer_id = match status {
                PlotStatus::Sold => Some(SOLD_BUYER),
                PlotStatus::Booked => Some(BOOKED_BUYER),
                PlotStatus::Available => None,
            };
            Plot {
                id: format!("A-{:02}", i + 1),
                size,
                status,
                price_per_sq_ft: 2500.0 + f64::from((i % 4) as u32) * 200.0,
                buyer_id,
                broker_id: (i % 5 == 0).then(|| BROKERS[i % 4]),
                is_corner: i % 10 == 0,
                is_park_facing: i % 7 == 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_counts() {
        let plots = plots();
        assert_eq!(plots.len(), 81);
        let count = |status| plots.iter().filter(|p| p.status == status).count();
        assert_eq!(count(PlotStatus::Sold), 38);
        assert_eq!(count(PlotStatus::Booked), 24);
        assert_eq!(count(PlotStatus::Available), 19);
    }

    #[test]
    fn first_and_last_plots() {
        let plots = plots();
        let first = &plots[0];
        assert_eq!(first.id, "A-01");
        assert_eq!(first.size, 920);
        assert_eq!(first.buyer_id, Some(6));
        assert_eq!(first.broker_id, Some(1));
        assert!(first.is_corner && first.is_park_facing);

        let last = &plots[80];
        assert_eq!(last.id, "A-81");
        assert_eq!(last.size, 4500);
        assert_eq!(last.status, PlotStatus::Available);
        assert_eq!(last.buyer_id, None);
        assert_eq!(last.price_per_sq_ft, 2500.0);
    }

    #[test]
    fn brokers_rotate_every_fifth_plot() {
        let plots = plots();
        assert_eq!(plots[5].broker_id, Some(2));
        assert_eq!(plots[10].broker_id, Some(3));
        assert_eq!(plots[15].broker_id, Some(4));
        assert_eq!(plots[3].broker_id, None);
        assert_eq!(plots[3].price_per_sq_ft, 3100.0);
    }
}
