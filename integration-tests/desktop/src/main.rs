use colored::Colorize as _;

mod context;

macro_rules! tests {
  ($($name:expr, $module:ident),* $(,)?) => {
    // declare the modules for all scenarios
    $(
      mod $module;
    )*

    // list of all available scenarios
    const TEST_NAMES: &[&str] = &[$( $name ),*];

    // run a given scenario
    fn run_test(name: &str) {
      $(
        if name == $name {
          $module::fixture();
          println!("{}", "ok".green());
          return;
        }
      )*

      println!("{} is not a valid scenario. Possible values", name.red());

      for test_name in TEST_NAMES {
        println!("  -> {}", test_name.blue());
      }
    }
  }
}

tests! {
  "generate-and-dispose", generate_and_dispose,
  "adopt-bad-id", adopt_bad_id,
  "compile-and-introspect", compile_and_introspect,
  "bad-frag-data-binding", bad_frag_data_binding,
  "attach-twice", attach_twice,
  "handles-as-map-keys", handles_as_map_keys,
  "source-round-trip", source_round_trip,
}

fn main() {
  let test_name = std::env::args().nth(1);

  if let Some(test_name) = test_name {
    println!("scenario: {}", test_name.green());

    // the context stays current until the scenario is done
    let _context = context::create();

    run_test(&test_name);
  } else {
    println!("Please provide a scenario name. Possible values");

    for test_name in TEST_NAMES {
      println!("  -> {}", test_name.blue());
    }
  }
}
