use pdf_compose::layout::Margins;
use pdf_compose::{inches, pagesize, Document, Drawable, Helvetica, PageContents, Paragraph};
use std::rc::Rc;

fn main() {
    let helvetica = Rc::new(Helvetica);

    // half letter pages with half an inch of margin all round
    let mut doc = Document::new(pagesize::HALF_LETTER, Margins::all(inches(0.5)));

    let mut chapter = doc.new_chapter("Lorem Ipsum");
    chapter.add(Paragraph::new(
        format!("{}\n{}", lipsum::lipsum(3), lipsum::lipsum(4)),
        helvetica.clone(),
    ));

    let section = chapter.new_subchapter("Dolor Sit Amet");
    let mut body = Paragraph::new(lipsum::lipsum(256), helvetica.clone());
    body.set_line_height(1.2);
    section.add(body);

    let closing = chapter.new_subchapter("Consectetur");
    closing.add(Paragraph::new(lipsum::lipsum(64), helvetica));

    println!(
        "chapter {} is {} tall, {} wide",
        chapter.number(),
        chapter.height(),
        chapter.width()
    );

    doc.draw(&chapter).expect("can lay out chapter");

    for (index, page) in doc.pages().enumerate() {
        println!("page {}", index + 1);
        for item in &page.contents {
            match item {
                PageContents::Text(span) => println!(
                    "  ({:>6.1}, {:>6.1}) {}pt  {}",
                    span.x.0, span.y.0, span.font_size, span.text
                ),
                PageContents::Image(placement) => println!(
                    "  ({:>6.1}, {:>6.1}) image {}x{}",
                    placement.x.0, placement.y.0, placement.width, placement.height
                ),
            }
        }
    }
}
