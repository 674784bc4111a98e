#[moja_macros::magic]
trait Moja {
    fn pull_out(&self) -> String;
}

#[moja_macros::magic]
trait TopHat {
    fn pull_out(&self) -> String;
}

fn main() {
    assert_eq!(MojaImpl.pull_out(), TopHatImpl.pull_out());
}
