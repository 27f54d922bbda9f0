use super::*;

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_raw(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 255]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn echo_replies_with_posted_bytes() {
    let mut port = LoopbackPort::echo();
    port.post(vec![1, 2, 3]).unwrap();
    assert_eq!(pollster::block_on(port.recv()).unwrap(), vec![1, 2, 3]);
}

#[test]
fn recv_without_post_fails() {
    let mut port = LoopbackPort::echo();
    assert!(pollster::block_on(port.recv()).is_err());
}

#[test]
fn dropped_reply_closes_channel() {
    let mut port = LoopbackPort::new(|_, reply| drop(reply));
    port.post(vec![1]).unwrap();
    let err = pollster::block_on(port.recv()).unwrap_err();
    assert!(err.to_string().contains("closed before a reply"));
}

#[test]
fn first_reply_wins_when_answered_from_another_thread() {
    let mut port = LoopbackPort::new(|bytes, reply| {
        std::thread::spawn(move || reply.send(bytes));
    });
    port.post(vec![9, 9]).unwrap();
    assert_eq!(pollster::block_on(port.recv()).unwrap(), vec![9, 9]);
}

#[test]
fn png_normalizer_reencodes_valid_images() {
    let mut port = LoopbackPort::png_normalizer();
    port.post(tiny_png()).unwrap();
    let out = pollster::block_on(port.recv()).unwrap();
    let decoded = image::load_from_memory(&out).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.get_pixel(1, 0).0, [4, 5, 6, 255]);
}

#[test]
fn png_normalizer_fails_on_garbage() {
    let mut port = LoopbackPort::png_normalizer();
    port.post(b"garbage".to_vec()).unwrap();
    let err = pollster::block_on(port.recv()).unwrap_err();
    assert!(matches!(err, FrameshowError::Rasterization(_)));
}
