use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailmime::message::{
    encoder, header::ContentType, utf8_q, Attachment, BoundaryGenerator, MultiPart, Part,
};

fn nested_body(boundaries: &mut BoundaryGenerator, text: &str, image: &[u8]) -> Part {
    MultiPart::mixed()
        .init_boundary(boundaries)
        .part(
            MultiPart::alternative()
                .init_boundary(boundaries)
                .plain(text)
                .part(
                    MultiPart::related()
                        .init_boundary(boundaries)
                        .html(format!("<p>{text}</p><img src=\"cid:img\">"))
                        .part(
                            Attachment::new_inline(String::from("img"))
                                .body(ContentType::parse("image/png").unwrap(), image),
                        ),
                ),
        )
        .into()
}

fn criterion_benchmark(c: &mut Criterion) {
    let text = "Grüße aus Köln, ça va? ".repeat(200);
    let binary: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();

    c.bench_function("quoted-printable text", |b| {
        b.iter(|| encoder::quoted_printable(black_box(&text)))
    });
    c.bench_function("base64 64KiB", |b| {
        b.iter(|| encoder::base64(black_box(&binary)))
    });
    c.bench_function("q-encode subject", |b| {
        b.iter(|| utf8_q::encode(black_box("Grüße aus Köln")))
    });

    let body = nested_body(&mut BoundaryGenerator::with_seed(1), &text, &binary);
    c.bench_function("format nested multipart", |b| {
        b.iter(|| black_box(&body).formatted().unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
