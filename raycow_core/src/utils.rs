use colour::red;

pub fn print_intro() {
    println!(
        r#"
                                          
    _________ ___  ___________ _      __
   / ___/ __ `/ / / / ___/ __ \ | /| / /
  / /  / /_/ / /_/ / /__/ /_/ / |/ |/ / 
 /_/   \__,_/\__, /\___/\____/|__/|__/  
            /____/                      "#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Shadow rays are traced against every object, so expect slow renders.\n\n");
    }
}
