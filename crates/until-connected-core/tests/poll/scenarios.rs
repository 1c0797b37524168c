mod port {
    use crate::{generate_poll_tests, poll::PortTester, poll::Tester};

    generate_poll_tests!(PortTester);
}

mod url {
    use crate::{generate_poll_tests, poll::Tester, poll::UrlTester};

    generate_poll_tests!(UrlTester);
}
