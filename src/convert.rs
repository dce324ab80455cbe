// Copyright 2026 the svgpoly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converting path data into polygons.

use alloc::vec::Vec;

use crate::{
    flatten, split_contours_with, ContourCountError, ConvertError, ConvertOptions, ParseError,
    Polygon,
};

/// Convert SVG path data into polygons, one per contour.
///
/// Curves contribute their control points and arcs their endpoints; see
/// [`control_points`](crate::control_points). Polygons are returned in the
/// order their contours appear in the data.
///
/// ```
/// use svgpoly::svg_path_to_polygons;
///
/// let polygons = svg_path_to_polygons("m 10 20 30 40 z m 100 200 10 20").unwrap();
/// assert_eq!(polygons.len(), 2);
/// assert_eq!(polygons[0].to_tuples(), vec![(10., 20.), (40., 60.), (10., 20.)]);
/// assert_eq!(polygons[1].to_tuples(), vec![(110., 220.), (120., 240.)]);
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if the data is malformed.
pub fn svg_path_to_polygons(data: &str) -> Result<Vec<Polygon>, ParseError> {
    svg_path_to_polygons_with(data, &ConvertOptions::default())
}

/// Convert SVG path data into polygons, with explicit options.
///
/// # Errors
///
/// Returns a [`ParseError`] if the data is malformed.
pub fn svg_path_to_polygons_with(
    data: &str,
    options: &ConvertOptions,
) -> Result<Vec<Polygon>, ParseError> {
    let paths = split_contours_with(data, options)?;
    Ok(paths.iter().map(flatten).collect())
}

/// Convert SVG path data that must describe exactly one contour.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] if the data is malformed, and
/// [`ConvertError::ContourCount`] if it has no contour or several.
pub fn svg_path_to_polygon(data: &str) -> Result<Polygon, ConvertError> {
    svg_path_to_polygon_with(data, &ConvertOptions::default())
}

/// Convert SVG path data that must describe exactly one contour, with
/// explicit options.
///
/// # Errors
///
/// See [`svg_path_to_polygon`].
pub fn svg_path_to_polygon_with(
    data: &str,
    options: &ConvertOptions,
) -> Result<Polygon, ConvertError> {
    let polygons = svg_path_to_polygons_with(data, options)?;
    Ok(expect_contours::<1>(polygons)?.into_iter().next().unwrap_or_default())
}

/// Check that exactly `N` polygons were produced, returning them as an array.
///
/// # Errors
///
/// Returns a [`ContourCountError`] if the count differs.
pub fn expect_contours<const N: usize>(
    polygons: Vec<Polygon>,
) -> Result<[Polygon; N], ContourCountError> {
    let found = polygons.len();
    polygons
        .try_into()
        .map_err(|_| ContourCountError { expected: N, found })
}

#[cfg(test)]
mod tests {
    use crate::{
        expect_contours, svg_path_to_polygon, svg_path_to_polygons, svg_path_to_polygons_with,
        ContourCountError, ContourSplit, ConvertError, ConvertOptions, ParseErrorKind, Point,
    };

    fn tuples(data: &str) -> Vec<Vec<(f64, f64)>> {
        svg_path_to_polygons(data)
            .unwrap()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    #[test]
    fn absolute_line() {
        assert_eq!(tuples("M 10 20 L 30 40"), vec![vec![(10., 20.), (30., 40.)]]);
    }

    #[test]
    fn relative_move_with_implicit_line() {
        assert_eq!(tuples("m 10 20 30 40"), vec![vec![(10., 20.), (40., 60.)]]);
    }

    #[test]
    fn close_returns_to_start() {
        assert_eq!(
            tuples("m 10 20 30 40 z"),
            vec![vec![(10., 20.), (40., 60.), (10., 20.)]]
        );
    }

    #[test]
    fn two_contours() {
        assert_eq!(
            tuples("m 10 20 30 40 z m 100 200 10 20"),
            vec![
                vec![(10., 20.), (40., 60.), (10., 20.)],
                vec![(110., 220.), (120., 240.)]
            ]
        );
    }

    #[test]
    fn unknown_command() {
        let e = svg_path_to_polygons("m 10 20 X 1 2").unwrap_err();
        assert_eq!(e.kind(), &ParseErrorKind::UnknownCommand('X'));
        assert!(e.to_string().contains('X'));
    }

    #[test]
    fn curves_and_arcs() {
        assert_eq!(
            tuples("M 0 0 C 0 10 10 10 10 0 Q 15 -5 20 0 A 5 5 0 0 1 30 0"),
            vec![vec![
                (0., 0.),
                (0., 10.),
                (10., 10.),
                (10., 0.),
                (15., -5.),
                (20., 0.),
                (30., 0.)
            ]]
        );
    }

    #[test]
    fn closed_square() {
        // The explicit return to the start and the close line collapse.
        assert_eq!(
            tuples("M 0 0 L 10 0 L 10 10 L 0 10 L 0 0 Z"),
            vec![vec![(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]]
        );
    }

    #[test]
    fn single_contour_assertion() {
        let polygon = svg_path_to_polygon("m 1 2 3 4").unwrap();
        assert_eq!(polygon.points(), &[Point::new(1., 2.), Point::new(4., 6.)]);

        let e = svg_path_to_polygon("m 1 2 3 4 m 1 1 1 1").unwrap_err();
        assert_eq!(
            e,
            ConvertError::ContourCount(ContourCountError {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            svg_path_to_polygon("").unwrap_err(),
            ConvertError::ContourCount(ContourCountError {
                expected: 1,
                found: 0
            })
        );
        assert!(matches!(
            svg_path_to_polygon("m 1 2 Y"),
            Err(ConvertError::Parse(_))
        ));
    }

    #[test]
    fn expect_contour_array() {
        let polygons = svg_path_to_polygons("m 0 0 l 1 1 m 2 2 l 1 1").unwrap();
        let [a, b] = expect_contours::<2>(polygons).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(b[0], Point::new(2., 2.));
    }

    #[test]
    fn absolute_move_continues_polygon() {
        assert_eq!(
            tuples("M 0 0 L 1 1 M 5 5 L 6 6"),
            vec![vec![(0., 0.), (1., 1.), (5., 5.), (6., 6.)]]
        );
        let polygon = svg_path_to_polygon("M 0 0 L 1 1 M 5 5 L 6 6").unwrap();
        assert_eq!(polygon.len(), 4);

        let options = ConvertOptions::new().with_split(ContourSplit::AnyMove);
        let polygons = svg_path_to_polygons_with("M 0 0 L 1 1 M 5 5 L 6 6", &options).unwrap();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[1].to_tuples(), vec![(5., 5.), (6., 6.)]);
    }

    #[test]
    fn shared_points_collapse_across_curves_and_arcs() {
        let data = "m 0 0 c 1 1 2 2 3 3 3 3 3 3 3 3 a 1 1 0 0 1 3 3 z m 1 1 l 0 0";
        let polygons = svg_path_to_polygons(data).unwrap();
        assert_eq!(polygons.len(), 2);
        for polygon in &polygons {
            assert!(polygon.windows(2).all(|w| w[0] != w[1]));
        }
        assert_eq!(
            polygons[0].to_tuples(),
            vec![
                (0., 0.),
                (1., 1.),
                (2., 2.),
                (3., 3.),
                (6., 6.),
                (9., 9.),
                (0., 0.)
            ]
        );
        // The second move is measured from the first contour's start, and
        // the zero-length line adds nothing.
        assert_eq!(polygons[1].to_tuples(), vec![(1., 1.)]);
    }

    #[test]
    fn idempotent() {
        let data = "m 0.1 0.2 c 0.3 0.4 0.5 0.6 0.7 0.8 s 1.1 1.2 1.3 1.4 z m 5 5 a 1 2 3 0 1 4 5";
        let a = svg_path_to_polygons(data).unwrap();
        let b = svg_path_to_polygons(data).unwrap();
        let bits = |polys: &[crate::Polygon]| -> Vec<(u64, u64)> {
            polys
                .iter()
                .flat_map(|p| p.iter().map(|pt| (pt.x.to_bits(), pt.y.to_bits())))
                .collect()
        };
        assert_eq!(bits(&a[..]), bits(&b[..]));
    }

    mod properties {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        use crate::{
            split_contours, split_contours_with, svg_path_to_polygons, ContourSplit,
            ControlPolygon, ConvertOptions, Path,
        };

        fn coord(rng: &mut StdRng) -> i32 {
            // A narrow range so that repeated points come up often.
            rng.random_range(-3..=3)
        }

        /// Random path data with `n` contours, each opened by a relative move.
        fn random_path_data(rng: &mut StdRng, n: usize) -> String {
            let mut data = String::new();
            for _ in 0..n {
                data.push_str(&format!("m {} {}", coord(rng), coord(rng)));
                // Whether the last command takes a single coordinate pair.
                let mut takes_pair = true;
                for _ in 0..rng.random_range(0..8) {
                    let choice = rng.random_range(0..10);
                    let cmd = match choice {
                        // Bare pairs repeat the previous command.
                        0 if takes_pair => format!(" {} {}", coord(rng), coord(rng)),
                        0 | 1 => format!(" l {},{}", coord(rng), coord(rng)),
                        2 => format!(" L {} {}", coord(rng), coord(rng)),
                        3 => format!(" h {}", coord(rng)),
                        4 => format!(" V {}", coord(rng)),
                        5 => format!(
                            " c {} {} {} {} {} {}",
                            coord(rng),
                            coord(rng),
                            coord(rng),
                            coord(rng),
                            coord(rng),
                            coord(rng)
                        ),
                        6 => format!(
                            " q {} {} {} {}",
                            coord(rng),
                            coord(rng),
                            coord(rng),
                            coord(rng)
                        ),
                        7 => format!(
                            " a 5 5 0 {} {} {} {}",
                            rng.random_range(0..2),
                            rng.random_range(0..2),
                            coord(rng),
                            coord(rng)
                        ),
                        8 => " z".to_string(),
                        _ => format!(" M {} {}", coord(rng), coord(rng)),
                    };
                    takes_pair = matches!(choice, 0..=2 | 9);
                    data.push_str(&cmd);
                }
                data.push(' ');
            }
            data
        }

        #[test]
        fn random_paths() {
            let _ = env_logger::builder().is_test(true).try_init();
            let mut rng = StdRng::seed_from_u64(0x5eed);
            for _ in 0..500 {
                let n = rng.random_range(1..5);
                let data = random_path_data(&mut rng, n);

                let polygons = svg_path_to_polygons(&data).unwrap();
                let moves = data.char_indices().filter(|&(i, c)| c == 'm' && i > 0).count();
                assert_eq!(polygons.len(), 1 + moves, "contour count for {data:?}");
                for polygon in &polygons {
                    assert!(!polygon.is_empty());
                    assert!(
                        polygon.windows(2).all(|w| w[0] != w[1]),
                        "consecutive duplicate in {data:?}"
                    );
                }
                assert_eq!(polygons, svg_path_to_polygons(&data).unwrap());

                for path in split_contours(&data).unwrap() {
                    assert_contiguous(&path, &data);
                }

                let any_move = ConvertOptions::new().with_split(ContourSplit::AnyMove);
                let paths = split_contours_with(&data, &any_move).unwrap();
                let all_moves = data
                    .char_indices()
                    .filter(|&(i, c)| matches!(c, 'm' | 'M') && i > 0)
                    .count();
                assert_eq!(paths.len(), 1 + all_moves, "contour count for {data:?}");
                for path in &paths {
                    assert_contiguous(path, &data);
                }
            }
        }

        fn assert_contiguous(path: &Path, data: &str) {
            let mut last = path.start();
            for seg in path.segments() {
                assert_eq!(seg.start(), last, "discontinuous path in {data:?}");
                last = seg.end();
            }
        }
    }
}
