use futex_pc_spec_gen::pc::PcSequence;

fn main() {
    print!("{}", PcSequence::futex_lock_unlock().to_spec_string());
}
