use skipindex::{comparator::FloatDescend, Builder, SkipList};

fn main() {
  // scores, highest first, players with the same score keep their arrival order
  let mut board: SkipList<f64, &str, FloatDescend> = Builder::new()
    .with_comparator(FloatDescend)
    .build()
    .unwrap();

  board.add(72.5, "ada");
  board.add(91.0, "grace");
  board.add(72.5, "linus");
  let barbara = board.add(64.0, "barbara").ptr();
  board.add(88.0, "ken");

  println!("leader: {:?}", board.front());
  println!("tied at 72.5: {:?}", board.get_all(&72.5));

  // scores between 90 and 70, best first
  board.range_each(&90.0, &70.0, |ent| {
    println!("{:>6} {}", ent.key(), ent.value());
    true
  });

  board.remove(barbara);
  board.set(91.0, "grace (updated)");
  println!("{board:?}");
  print!("{}", board.debugger());
}
