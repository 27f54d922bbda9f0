use super::*;
use crate::raster::channel::LoopbackPort;
use crate::scene::model::NodeKind;

struct FixedExporter {
    calls: usize,
    fail_on: Option<usize>,
}

impl ImageExporter for FixedExporter {
    async fn export_png(&mut self, region: &Region) -> FrameshowResult<Vec<u8>> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_on == Some(call) {
            return Err(FrameshowError::host("export refused"));
        }
        Ok(region.name.as_bytes().to_vec())
    }
}

fn region(id: u64, name: &str, x: f64, y: f64) -> Region {
    Region {
        id: NodeId(id),
        kind: NodeKind::Frame,
        name: name.to_string(),
        bounds: Rect::from_origin_size((x, y), (100.0, 50.0)),
    }
}

#[test]
fn convert_keeps_geometry_and_reply_bytes() {
    let mut r = ChannelRasterizer::new(
        FixedExporter {
            calls: 0,
            fail_on: None,
        },
        LoopbackPort::new(|mut bytes, reply| {
            bytes.push(b'!');
            reply.send(bytes);
        }),
    );
    let slide = pollster::block_on(r.convert(&region(3, "intro", 10.0, 20.0))).unwrap();
    assert_eq!(slide.source, NodeId(3));
    assert_eq!(slide.bounds(), Rect::new(10.0, 20.0, 110.0, 70.0));
    assert_eq!(slide.size(), Size::new(100.0, 50.0));
    assert_eq!(slide.bytes.as_slice(), b"intro!");
}

#[test]
fn export_failure_becomes_rasterization_error() {
    let mut r = ChannelRasterizer::new(
        FixedExporter {
            calls: 0,
            fail_on: Some(0),
        },
        LoopbackPort::echo(),
    );
    let err = pollster::block_on(r.convert(&region(1, "a", 0.0, 0.0))).unwrap_err();
    assert!(matches!(err, FrameshowError::Rasterization(_)));
    assert!(err.to_string().contains("export refused"));
}

#[test]
fn empty_reply_is_rejected() {
    let mut r = ChannelRasterizer::new(
        FixedExporter {
            calls: 0,
            fail_on: None,
        },
        LoopbackPort::new(|_, reply| reply.send(Vec::new())),
    );
    let err = pollster::block_on(r.convert(&region(1, "a", 0.0, 0.0))).unwrap_err();
    assert!(matches!(err, FrameshowError::Rasterization(_)));
}

#[test]
fn rasterize_all_is_ordered_and_stops_at_first_failure() {
    let frames = vec![
        region(1, "a", 0.0, 0.0),
        region(2, "b", 0.0, 100.0),
        region(3, "c", 0.0, 200.0),
    ];

    let mut ok = ChannelRasterizer::new(
        FixedExporter {
            calls: 0,
            fail_on: None,
        },
        LoopbackPort::echo(),
    );
    let slides = pollster::block_on(rasterize_all(&mut ok, &frames)).unwrap();
    let sources: Vec<_> = slides.iter().map(|s| s.source).collect();
    assert_eq!(sources, vec![NodeId(1), NodeId(2), NodeId(3)]);

    let mut failing = ChannelRasterizer::new(
        FixedExporter {
            calls: 0,
            fail_on: Some(1),
        },
        LoopbackPort::echo(),
    );
    assert!(pollster::block_on(rasterize_all(&mut failing, &frames)).is_err());
    let (exporter, _) = failing.into_parts();
    assert_eq!(exporter.calls, 2);
}
